//! Output formatting utilities.

use packed_event::{display_tag_value, PackedEventError, PackedEventView};

/// Formats the fixed header fields as `key: value` lines.
pub fn format_header(view: &PackedEventView<'_>) -> String {
    let expiration = view
        .expiration_at()
        .map(|ts| ts.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<12} {}\n{:<12} {}\n{:<12} {}\n{:<12} {}\n{:<12} {}",
        "ID",
        hex::encode(view.id()),
        "PUBKEY",
        hex::encode(view.pubkey()),
        "CREATED_AT",
        view.created_at(),
        "KIND",
        view.kind(),
        "EXPIRATION",
        expiration
    )
}

/// Formats each tag as a table row.
pub fn format_tag_rows(view: &PackedEventView<'_>) -> Result<Vec<String>, PackedEventError> {
    view.tags()
        .map(|tag| {
            let tag = tag?;
            Ok(format!(
                "{:<6} {:<5} {}",
                tag.name_char(),
                tag.value.len(),
                display_tag_value(&tag)
            ))
        })
        .collect()
}

/// Prints tag table header.
#[allow(clippy::print_literal)]
pub fn print_tag_header() {
    println!("{:<6} {:<5} {}", "TAG", "LEN", "VALUE");
    println!("{}", "-".repeat(80));
}
