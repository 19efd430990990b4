//! videoshop - disc catalog CLI
//!
//! Inspect a catalog of DVDs and Blu-rays, comment on discs and export the
//! catalog with its ratings.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write the shop's initial stock to a catalog file
//! videoshop sample --output catalog.toml
//!
//! # Comment on a disc and keep the change
//! videoshop comment catalog.toml --disc "Akira" --rating 5 --text "Neo-Tokyo!" --save
//!
//! # List discs with their ratings
//! videoshop show catalog.toml
//!
//! # Export as Markdown
//! videoshop export catalog.toml --format markdown
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
