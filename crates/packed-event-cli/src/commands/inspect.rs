//! Inspect command implementation.

use crate::input;
use crate::output;
use packed_event::{summarize, PackedEventView};

pub fn run(
    input: String,
    hex: bool,
    json: bool,
    permissive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = input::read_packed(&input, hex)?;
    let view = PackedEventView::with_mode(&bytes, input::scan_mode(permissive))
        .map_err(|e| format!("Invalid packed event: {}", e))?;

    if json {
        let summary = summarize(&view)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let rows = output::format_tag_rows(&view)?;

    println!("{}", output::format_header(&view));
    println!();
    output::print_tag_header();
    for row in rows {
        println!("{}", row);
    }

    Ok(())
}
