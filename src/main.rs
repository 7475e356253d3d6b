use std::fs;

use clap::Parser;
use mrog::interpret;

/// mrog is an easy to use, domain-specific scripting language for numeric
/// mathematics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    filename: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.filename).unwrap_or_else(|_| {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            &args.filename
        );
        std::process::exit(1);
    });

    match interpret(&script) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
