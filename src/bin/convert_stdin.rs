//! Simple CLI that reads an HTML document from stdin and prints the
//! conversion result as one JSON object on stdout.

use clipmark::convert;
use std::io::{self, Read};

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = convert(&html);

    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
