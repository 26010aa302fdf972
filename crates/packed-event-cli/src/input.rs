//! Input loading for packed buffers and event JSON.

use packed_event::ScanMode;
use std::io::{self, Read};
use thiserror::Error;

/// Errors raised while loading command input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("invalid hex in {path}: {source}")]
    Hex {
        path: String,
        source: hex::FromHexError,
    },
}

/// Reads a packed buffer from `path`, as raw bytes or as hex text.
pub fn read_packed(path: &str, hex: bool) -> Result<Vec<u8>, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_string(),
        source,
    })?;

    if !hex {
        return Ok(bytes);
    }

    let text = String::from_utf8_lossy(&bytes);
    hex::decode(text.trim()).map_err(|source| InputError::Hex {
        path: path.to_string(),
        source,
    })
}

/// Reads text from a file, or stdin if no path is given.
pub fn read_text(input: Option<&str>) -> Result<String, InputError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}

pub fn scan_mode(permissive: bool) -> ScanMode {
    if permissive {
        ScanMode::Permissive
    } else {
        ScanMode::Strict
    }
}
