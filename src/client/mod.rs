//! This module provides the Trello API client.
//!
//! # Example
//!
//! See demos/get_board.rs
//!
//! ```no_run
#![doc = include_str!("../../demos/get_board.rs")]
//! ```

mod api;
pub use api::*;

mod arguments;
pub use arguments::*;

mod errors;
pub use errors::*;
