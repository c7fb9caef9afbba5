//! Headless deck generation, bypassing the folder dialogs.
//!
//! Run with: cargo run --example generate_deck <root_dir> <template.pptx> <output_dir>

use dir_to_pptx::{generate_report, DeckConfig, Result};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: cargo run --example generate_deck <root_dir> <template.pptx> <output_dir>");
        return Ok(());
    }

    let config = DeckConfig::builder()
        .max_items_per_slide(40)
        .build();

    let output = generate_report(
        Path::new(&args[1]),
        Path::new(&args[2]),
        Path::new(&args[3]),
        &config,
    )?;

    println!("PowerPoint file '{}' created successfully.", output.display());
    Ok(())
}
