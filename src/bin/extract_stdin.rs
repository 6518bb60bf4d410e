//! Simple CLI that reads HTML from stdin and outputs the extraction result
//! as JSON on stdout. An optional first argument supplies the source URL
//! for metadata.

use std::io::{self, Read};

use domtext::{extract_bytes_with_options, Options};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options {
        url: std::env::args().nth(1),
        ..Options::default()
    };

    let result = extract_bytes_with_options(&html, &options);
    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
