//! Plain text vs. JSON: character counts for LLM context blocks.
//!
//! Run with: cargo run --example llm_context

use json2text::to_string;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let payload = serde_json::json!({
        "repository": {
            "name": "billing-service",
            "default_branch": "main",
            "topics": ["payments", "rust", "api"],
            "archived": false
        },
        "pull_request": {
            "number": 118,
            "title": "Add idempotency keys to charge endpoint",
            "author": "ada",
            "draft": false,
            "labels": ["backend", "needs-review"]
        }
    });

    let json = serde_json::to_string_pretty(&payload)?;
    let text = to_string(&payload)?;

    println!("JSON ({} chars):\n{}\n", json.chars().count(), json);
    println!("Plain text ({} chars):\n{}\n", text.chars().count(), text);

    let saved = 100.0 - (text.chars().count() as f64 / json.chars().count() as f64) * 100.0;
    println!("Saved {:.0}% of characters.", saved);

    Ok(())
}
