use crate::constants::USER_AGENT;
use reqwest::Client;

pub fn build_http_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("TLS backend failed to initialize")
}
