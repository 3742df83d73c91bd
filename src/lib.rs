//! trello-sdk is a Rust SDK for the Trello REST API: authenticated requests with generic JSON decoding.
//!
//! See [modules](#modules) for more details.

pub mod client;

mod constants;
mod utils;

pub use client::{Arguments, Result, TrelloClient, TrelloError};
pub use constants::DEFAULT_BASE_URL;

pub use reqwest;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
