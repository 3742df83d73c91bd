use std::env;
use trello_sdk::{serde::Deserialize, Arguments, TrelloClient};

#[derive(Debug, Deserialize)]
#[serde(crate = "trello_sdk::serde")]
struct Board {
    id: String,
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(crate = "trello_sdk::serde")]
struct List {
    id: String,
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let key = env::var("TRELLO_KEY").expect("TRELLO_KEY not set");
    let token = env::var("TRELLO_TOKEN").expect("TRELLO_TOKEN not set");

    let client = TrelloClient::new(&key, &token);

    let boards: Vec<Board> = client
        .get(
            "members/me/boards",
            &Arguments::from([("fields", "name,url"), ("filter", "open")]),
        )
        .await?;

    for board in &boards {
        println!("{} {} ({})", board.id, board.name, board.url);
    }

    let board_id = match env::var("TRELLO_BOARD_ID") {
        Ok(board_id) => board_id,
        Err(_) => match boards.first() {
            Some(board) => board.id.clone(),
            None => return Ok(()),
        },
    };

    let lists: Vec<List> = client
        .get(
            &format!("boards/{board_id}/lists"),
            &Arguments::from([("fields", "name")]),
        )
        .await?;

    for list in lists {
        println!("  {} {}", list.id, list.name);
    }

    Ok(())
}
