//! Basic plain-text rendering.
//!
//! Run with: cargo run --example simple

use json2text::to_string;
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            active: true,
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            active: false,
        },
    ];

    let text = to_string(&users)?;
    println!("Plain-text output:\n{}", text);

    Ok(())
}
