pub mod parse;
pub mod profiles;
pub mod scan;

use quelle_core::error::QuelleError;
use std::path::PathBuf;

/// Label text from a file, the command line, or stdin, in that order.
pub(crate) fn read_label_text(
    input_file: Option<PathBuf>,
    text: Option<String>,
) -> Result<String, QuelleError> {
    if let Some(text) = text {
        return Ok(text);
    }
    match input_file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}
