//! Pack command implementation.

use crate::input;
use packed_event::pack_event_json;
use serde_json::Value;
use tracing::info;

pub fn run(input: Option<String>, output: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = input::read_text(input.as_deref())?;

    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    let packed = pack_event_json(&value).map_err(|e| format!("Packing failed: {}", e))?;

    match output {
        Some(path) => {
            std::fs::write(&path, packed.as_bytes())
                .map_err(|e| format!("Failed to write {}: {}", path, e))?;
            info!(path = %path, size = packed.len(), "packed event written");
        }
        None => println!("{}", packed),
    }

    Ok(())
}
