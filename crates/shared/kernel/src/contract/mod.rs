//! Boundary between untyped API payloads and the typed [`ImageRecord`].
//!
//! Serde alone only checks the shape. Everything returned from here has also passed the
//! semantic checks in [`validate`], and failures name the offending field path.

mod search;

pub use search::ImageSearch;

use paw_domain::animal::{BreedInfo, ImageRecord};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, warn};
use url::Url;

#[paw_derive::paw_error]
pub enum ContractError {
    /// The payload is not JSON or does not have the declared shape.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("URL error{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// The payload decoded but violates a semantic rule.
    #[error("Invalid payload{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Parses and validates a single image record.
///
/// # Errors
/// [`ContractError::Decode`] for malformed JSON or shape mismatches, [`ContractError::Url`] and
/// [`ContractError::Invalid`] for semantic violations.
pub fn parse_image(raw: &str) -> Result<ImageRecord, ContractError> {
    let record: ImageRecord = serde_json::from_str(raw).context("Decoding image record")?;
    validate(&record)?;
    Ok(record)
}

/// Parses and validates the array returned by the image search endpoint.
///
/// # Errors
/// See [`parse_image`]; the context carries the index of the failing element.
pub fn parse_images(raw: &str) -> Result<Vec<ImageRecord>, ContractError> {
    let records: Vec<ImageRecord> =
        serde_json::from_str(raw).context("Decoding image search response")?;

    for (index, record) in records.iter().enumerate() {
        validate_at(record, &format!("[{index}]."))?;
    }

    debug!(count = records.len(), "Parsed image search response");
    Ok(records)
}

/// Converts an already decoded JSON value into a validated record.
///
/// # Errors
/// See [`parse_image`].
pub fn parse_value(value: Value) -> Result<ImageRecord, ContractError> {
    let record: ImageRecord = serde_json::from_value(value).context("Decoding image record")?;
    validate(&record)?;
    Ok(record)
}

/// Checks the rules serde cannot express.
///
/// * `id` is not blank.
/// * `url` is an absolute `http`/`https` URL.
/// * `width` and `height` are non-zero.
/// * every breed has a non-blank `name`.
///
/// # Errors
/// Returns the first violation found, with the field path as context.
pub fn validate(record: &ImageRecord) -> Result<(), ContractError> {
    validate_at(record, "")
}

fn validate_at(record: &ImageRecord, prefix: &str) -> Result<(), ContractError> {
    let result = check_record(record, prefix);
    if let Err(err) = &result {
        warn!(image_id = %record.id, error = %err, "Rejected image record");
    }
    result
}

fn check_record(record: &ImageRecord, prefix: &str) -> Result<(), ContractError> {
    if record.id.trim().is_empty() {
        return Err(invalid("image id is blank", format!("{prefix}id")));
    }

    let url = Url::parse(&record.url).context(format!("{prefix}url"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            format!("unsupported scheme '{}'", url.scheme()),
            format!("{prefix}url"),
        ));
    }

    if record.width == 0 || record.height == 0 {
        return Err(invalid(
            format!("image dimensions must be non-zero, got {}x{}", record.width, record.height),
            format!("{prefix}width"),
        ));
    }

    for (index, breed) in record.breeds.iter().enumerate() {
        check_breed(breed, &format!("{prefix}breeds[{index}]."))?;
    }

    Ok(())
}

fn check_breed(breed: &BreedInfo, prefix: &str) -> Result<(), ContractError> {
    if breed.name.trim().is_empty() {
        return Err(invalid(format!("breed {} has a blank name", breed.id), format!("{prefix}name")));
    }
    Ok(())
}

fn invalid(message: impl Into<Cow<'static, str>>, field: String) -> ContractError {
    ContractError::Invalid { message: message.into(), context: Some(field.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({ "breeds": [], "id": "abc123", "url": "https://example.com/a.jpg", "width": 640, "height": 480 })
    }

    #[test]
    fn valid_record_passes() {
        let parsed = parse_value(record()).expect("valid record");
        assert_eq!(parsed.url, "https://example.com/a.jpg");
    }

    #[test]
    fn blank_id_names_the_field() {
        let mut raw = record();
        raw["id"] = json!("  ");
        let err = parse_value(raw).unwrap_err();
        assert!(matches!(&err, ContractError::Invalid { context: Some(c), .. } if *c == "id"));
    }

    #[test]
    fn relative_url_is_a_url_error() {
        let mut raw = record();
        raw["url"] = json!("/images/a.jpg");
        let err = parse_value(raw).unwrap_err();
        assert!(matches!(&err, ContractError::Url { context: Some(c), .. } if *c == "url"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut raw = record();
        raw["url"] = json!("ftp://example.com/a.jpg");
        let err = parse_value(raw).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"), "got: {err}");
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut raw = record();
        raw["height"] = json!(0);
        let err = parse_value(raw).unwrap_err();
        assert!(err.to_string().contains("640x0"), "got: {err}");
    }
}
