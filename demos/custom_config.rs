//! Customizing the rendering: key order, array layout, and limits.
//!
//! Run with: cargo run --example custom_config

use json2text::{serialize_with_config, tree, ArrayFormat, SerializeConfig, SortKeys};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = tree!({
        "service": "billing",
        "region": null,
        "endpoints": ["/charge", "/refund", "/status"],
        "limits": {
            "rps": 200,
            "burst": 500
        }
    });

    // Defaults: nulls dropped, keys ascending, auto array layout.
    println!("defaults:\n{}\n", serialize_with_config(&data, &SerializeConfig::new())?);

    // Preserve insertion order and keep null entries.
    let config = SerializeConfig::new()
        .with_sort_keys(SortKeys::None)
        .with_ignore_falsy(false);
    println!("insertion order, nulls kept:\n{}\n", serialize_with_config(&data, &config)?);

    // Force block layout and bound the output for untrusted input.
    let config = SerializeConfig::new()
        .with_array_format(ArrayFormat::Indented)
        .with_max_array_items(2)
        .with_max_chars(200);
    println!("bounded block layout:\n{}", serialize_with_config(&data, &config)?);

    Ok(())
}
