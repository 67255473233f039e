//! Terminal flood-fill demo.
//!
//! Run: cargo run --bin floodfill -- --help

use clap::Parser;
use floodfill_demos::{Args, run};

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
