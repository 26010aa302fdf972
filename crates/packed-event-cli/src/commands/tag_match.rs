//! Match command implementation.

use crate::input;
use packed_event::{tag_value_for_match, PackedEventView};
use tracing::debug;

pub fn run(
    input: String,
    tag: String,
    value: String,
    raw_value: bool,
    hex: bool,
    permissive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = input::read_packed(&input, hex)?;
    let view = PackedEventView::with_mode(&bytes, input::scan_mode(permissive))
        .map_err(|e| format!("Invalid packed event: {}", e))?;

    let needle = if raw_value {
        value.into_bytes()
    } else {
        tag_value_for_match(&tag, &value).map_err(|e| format!("Invalid tag value: {}", e))?
    };

    let found = view.has_tag_with_value(&tag, &needle)?;
    debug!(tag = %tag, found, "tag match evaluated");
    println!("{}", found);

    if !found {
        std::process::exit(2);
    }
    Ok(())
}
