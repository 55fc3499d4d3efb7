//! Import parser: the reverse of the export pipeline.
//!
//! Given a previously exported document's raw text, locate the embedded
//! data literal by the serializer's fixed marker, parse it as a JSON array
//! of slide records, and re-hydrate each record into a live slide. Charts
//! come back through the symbolic-name registry; an unknown name simply
//! means no chart. Parsed slides are staged for the user to pick from, not
//! merged into the deck here.

use crate::errors::AppError;
use crate::export::DATA_MARKER;
use crate::models::slide::{Slide, SlideRecord};

/// Locate the embedded array literal: everything between the marker and
/// the first `];` after it.
pub fn extract_data_literal(content: &str) -> Result<&str, AppError> {
    let start = content
        .find(DATA_MARKER)
        .ok_or_else(|| {
            AppError::ImportFormat(
                "Could not find presentation data in the selected file.".to_string(),
            )
        })?
        + DATA_MARKER.len();
    let end = content[start..].find("];").ok_or_else(|| {
        AppError::ImportFormat("Could not find presentation data in the selected file.".to_string())
    })?;
    Ok(&content[start..start + end + 1])
}

/// Parse an exported document into staged slides.
pub fn parse_document(content: &str) -> Result<Vec<Slide>, AppError> {
    let literal = extract_data_literal(content)?;
    let value: serde_json::Value = serde_json::from_str(literal)
        .map_err(|e| AppError::ImportFormat(format!("Malformed slide data: {e}")))?;
    if !value.is_array() {
        return Err(AppError::ImportFormat(
            "Parsed slide data is not an array.".to_string(),
        ));
    }
    let records: Vec<SlideRecord> = serde_json::from_value(value)
        .map_err(|e| AppError::ImportFormat(format!("Malformed slide data: {e}")))?;
    Ok(records.into_iter().map(SlideRecord::into_slide).collect())
}

/// Gate an uploaded file on its declared content type before parsing.
pub fn validate_import_content_type(content_type: &str) -> Result<(), AppError> {
    if content_type.contains("html") {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Please select a valid HTML file.".to_string(),
        ))
    }
}
