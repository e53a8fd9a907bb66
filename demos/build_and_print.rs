//! Building a tree with the yaml! macro and printing it back to text.
//!
//! Run with: cargo run --example build_and_print

use std::error::Error;
use yamlite::{parse_str, to_yaml_string, yaml, Item};

fn main() -> Result<(), Box<dyn Error>> {
    let tree = yaml!({
        "name": "gateway",
        "replicas": 3,
        "resources": {
            "cpu": 0.5,
            "memory": "512Mi"
        },
        "tags": ["edge", "public"]
    });

    let text = to_yaml_string(&Item::new(tree));
    println!("{}", text);

    // The printed text parses back to an equal tree.
    let back = parse_str(&text)?;
    assert_eq!(to_yaml_string(&back), text);
    println!("round-trip stable");

    Ok(())
}
