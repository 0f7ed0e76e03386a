//! CLI tool for taintview - renders a taint-origins JSON mapping as HTML
//!
//! Usage:
//!   taintview_cli <origins.json>              # Output HTML to stdout
//!   taintview_cli <origins.json> -o out.html  # Output HTML to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use taintview::origins::TaintOrigins;
use taintview::table::TableModel;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: taintview_cli <origins.json> [-o output.html]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let json = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Decode the origin -> taint mapping
    let origins = match TaintOrigins::from_json(&json) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error decoding taint origins: {}", e);
            std::process::exit(1);
        }
    };

    let html = TableModel::from_origins(&origins).to_html();

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(html.as_bytes()).unwrap();
            println!();
        }
    }
}
