/// Root of the Trello REST API, against which relative paths are resolved.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
