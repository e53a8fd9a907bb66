//! Anchors, aliases, and merge-key inheritance.
//!
//! Run with: cargo run --example anchors_merge

use std::error::Error;
use yamlite::YamlParser;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = "\
defaults: &base
  timeout: 30
  retries: 3
  log_level: info
api:
  <<: *base
  timeout: 60
worker:
  <<: *base
  log_level: debug
mirror: *base
";

    let mut parser = YamlParser::new();
    parser.parse_str(doc)?;

    for name in ["api", "worker", "mirror"] {
        let svc = parser.get(name)?.value.as_map()?;
        println!("{}:", name);
        for (key, item) in svc.iter() {
            println!("  {} = {}", key, item.value);
        }
    }

    Ok(())
}
