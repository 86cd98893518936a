pub mod color;
pub mod parse;
pub mod pipeline;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use itertools::Itertools;
use std::path::PathBuf;

/// Output file name, written to the current working directory.
const OUTPUT_FILE: &str = "Hex Codes.txt";

const FORMAT_HELP: &str = "\
Formats:
  RGB
      160, 25, 60
      48, 60, 0

  RGBA
      20, 127, 30, 127
      255, 127, 127, 60

Alpha values of 255 are omitted from the output automatically.";

/// Convert a list of RGB/RGBA values to hex color codes
#[derive(Parser)]
#[command(author, version, about, long_about = None, after_long_help = FORMAT_HELP)]
struct Args {
    /// Input file with one `R, G, B` or `R, G, B, A` color per line
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let Some(path) = args.path else {
        Args::command().print_long_help()?;
        return Ok(());
    };

    println!("Reading input file...");
    let input = std::fs::read_to_string(&path).context("Failed to read input file!")?;
    let report = pipeline::convert_lines(input.lines());

    for (number, text) in report.skipped() {
        println!("Skipped line {number}");
        println!("   {text}");
        println!();
    }

    println!("Writing output file...");
    if report.colors().next().is_some() {
        for (counter, color) in report.colors().enumerate() {
            println!("Color {}", counter + 1);
            if color.is_opaque() {
                println!("RGB: {color}");
            } else {
                println!("RGBA: {color}");
            }
            println!("Hex: {}", color.hex());
            println!();
        }

        let hex_codes: String = report.hex_codes().join("\n") + "\n";
        std::fs::write(OUTPUT_FILE, hex_codes).context("Failed to write output file!")?;
    }

    println!("Done!");
    Ok(())
}
