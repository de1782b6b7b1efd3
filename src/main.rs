use std::process::exit;

use rusty_roster::prelude::run_app;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
