//! API utility functions
//!
//! Stateless helpers for reading requests and encoding responses.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use serde::Serialize;
use tracing::debug;

use super::models::Contact;
use crate::api::error::ApiError;

/// Reads the whole request body and enforces the size limit.
///
/// Any read failure, including the body read timeout, is reported as an
/// invalid payload.
pub async fn read_body(body: Body, max_size: usize) -> Result<Vec<u8>, ApiError> {
    let data = body
        .collect()
        .await
        .map_err(|err| {
            debug!(error = %err, "Failed to read request body");
            ApiError::InvalidPayload
        })?
        .to_bytes()
        .to_vec();

    validate_body_size(&data, max_size)?;

    Ok(data)
}

/// Validates that body size does not exceed the maximum allowed size
pub fn validate_body_size(data: &[u8], max_size: usize) -> Result<(), ApiError> {
    if data.len() > max_size {
        return Err(ApiError::PayloadTooLarge(data.len()));
    }
    Ok(())
}

/// Decodes the first JSON value of a body into a contact.
///
/// `null` yields the zero contact. Whitespace or further values after the first
/// one are ignored. An empty body is an error, and so is a string holding a
/// lone surrogate escape such as `"\ud800"`.
pub fn decode_contact(data: &[u8]) -> Result<Contact, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(data).into_iter::<Option<Contact>>();

    match values.next() {
        Some(Ok(contact)) => Ok(contact.unwrap_or_default()),
        Some(Err(err)) => {
            debug!(error = %err, "Rejecting contact payload");
            Err(ApiError::InvalidPayload)
        }
        None => Err(ApiError::InvalidPayload),
    }
}

/// Parses a path segment as a signed decimal contact id
pub fn parse_contact_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// Encodes a value as compact JSON terminated by a newline
pub fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>, ApiError> {
    let mut body =
        serde_json::to_vec(value).map_err(|err| ApiError::Internal(err.to_string()))?;
    body.push(b'\n');
    Ok(body)
}

/// Builds a JSON response; the body is fully encoded before the status is set.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, ApiError> {
    let body = encode_json(value)?;
    Ok((
        status,
        [(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_body_size_ok() {
        let data = vec![0u8; 1000];
        assert!(validate_body_size(&data, 1000).is_ok());
        assert!(validate_body_size(&data, 2000).is_ok());
        assert!(validate_body_size(&[], 100).is_ok());
    }

    #[test]
    fn test_validate_body_size_too_large() {
        let data = vec![0u8; 1000];
        match validate_body_size(&data, 999) {
            Err(ApiError::PayloadTooLarge(size)) => assert_eq!(size, 1000),
            _ => panic!("Expected PayloadTooLarge error"),
        }
    }

    #[test]
    fn test_decode_contact_variants() {
        let contact = decode_contact(br#"{"id":7,"name":"Ann","extra":true}"#).unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Ann");

        assert_eq!(decode_contact(b"{}").unwrap(), Contact::default());
        assert_eq!(decode_contact(b"null").unwrap(), Contact::default());
        assert_eq!(decode_contact(b"{\"id\":3} {\"id\":4}").unwrap().id, 3);
        assert_eq!(decode_contact(br#"{"id":null}"#).unwrap().id, 0);
    }

    #[test]
    fn test_decode_contact_rejects_bad_json() {
        assert!(matches!(decode_contact(b""), Err(ApiError::InvalidPayload)));
        assert!(matches!(decode_contact(b"{"), Err(ApiError::InvalidPayload)));
        assert!(matches!(
            decode_contact(br#"{"id":"one"}"#),
            Err(ApiError::InvalidPayload)
        ));
        assert!(matches!(decode_contact(b"[1,2]"), Err(ApiError::InvalidPayload)));
        assert!(matches!(
            decode_contact(br#"{"name":"\ud800"}"#),
            Err(ApiError::InvalidPayload)
        ));
    }

    #[test]
    fn test_decode_contact_lenient_keys() {
        let contact = decode_contact(br#"{"id":1,"id":2}"#).unwrap();
        assert_eq!(contact.id, 2);

        let contact = decode_contact(br#"{"ID":7,"Name":"Ann"}"#).unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.name, "Ann");
    }

    #[test]
    fn test_parse_contact_id() {
        assert_eq!(parse_contact_id("42").unwrap(), 42);
        assert_eq!(parse_contact_id("-3").unwrap(), -3);
        assert_eq!(parse_contact_id("+5").unwrap(), 5);
        assert!(matches!(parse_contact_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_contact_id("1.5"), Err(ApiError::InvalidId)));
        assert!(matches!(
            parse_contact_id("99999999999999999999"),
            Err(ApiError::InvalidId)
        ));
    }

    #[test]
    fn test_encode_json_appends_newline() {
        let body = encode_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(body, b"{\"a\":1}\n");
    }
}
