//! Parsing a configuration document with typed access.
//!
//! Run with: cargo run --example basic_config

use std::error::Error;
use yamlite::YamlParser;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = "\
# application settings
server:
  host: localhost
  port: 8080
  timeout: 2.5
debug: true
tags: [web, internal]
";

    let mut parser = YamlParser::new();
    parser.parse_str(doc)?;

    let server = parser.get("server")?.value.as_map()?;
    let host = server.get("host").ok_or("missing host")?.value.as_str()?;
    let port = server.get("port").ok_or("missing port")?.value.as_int()?;
    println!("server = {}:{}", host, port);

    let debug = parser.get("debug")?.value.as_bool()?;
    println!("debug = {}", debug);

    let tags = parser.get("tags")?.value.as_seq()?;
    for tag in tags {
        println!("tag: {}", tag.value.as_str()?);
    }

    // Wrong-kind access fails with a typed error instead of panicking.
    let err = parser.get("debug")?.value.as_int().unwrap_err();
    println!("as expected: {}", err);

    Ok(())
}
