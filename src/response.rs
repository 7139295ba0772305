//! HTTP-facing view of the decoder.
//!
//! Maps a raw path segment to the status code and JSON body a web handler should return,
//! without depending on any web framework. Every rejection collapses to one 400 body so the
//! caller never learns which check failed.

use crate::error::{INVALID_NATIONAL_ID, InvalidNationalId};
use crate::{CalendarDate, DecodedIdentity, parse_on};
use serde::Serialize;

/// Route the decoder is mounted under, with `{national_id}` as the path parameter
pub const ROUTE: &str = "/national-id/{national_id}/";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// JSON body of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Identity(DecodedIdentity),
    Error { error: &'static str },
}

/// Status code and body for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Body,
}

impl Response {
    pub const fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Renders the body as compact JSON
    ///
    /// # Errors
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

impl From<Result<DecodedIdentity, InvalidNationalId>> for Response {
    fn from(result: Result<DecodedIdentity, InvalidNationalId>) -> Self {
        match result {
            Ok(identity) => Self {
                status: STATUS_OK,
                body: Body::Identity(identity),
            },
            Err(_) => Self {
                status: STATUS_BAD_REQUEST,
                body: Body::Error {
                    error: INVALID_NATIONAL_ID,
                },
            },
        }
    }
}

/// Decodes `national_id` against today's local date
pub fn respond(national_id: &str) -> Response {
    respond_on(national_id, CalendarDate::today())
}

/// Decodes `national_id` against an explicit reference date
pub fn respond_on(national_id: &str, today: CalendarDate) -> Response {
    let result = parse_on(national_id, today).map_err(InvalidNationalId::from);
    let response = Response::from(result);
    tracing::info!(status = response.status, "national ID lookup");
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, ParseError};
    use serde_json::json;

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_valid_id_is_ok() {
        let response = respond_on("30107211500852", today());
        assert!(response.is_success());
        assert_eq!(response.status, STATUS_OK);
        let body: serde_json::Value =
            serde_json::from_str(&response.to_json().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "birth_date": "2001-07-21",
                "governorate": "Kafr El - Sheikh",
                "gender": "MALE",
            })
        );
    }

    #[test]
    fn test_every_error_kind_gives_the_same_body() {
        let frozen = CalendarDate::from_ymd(2010, 1, 1).unwrap();
        for input in [
            "12345678901234",
            "INVALID_VALUE",
            "30102301500852",
            "31107211500852",
            "",
        ] {
            let response = respond_on(input, frozen);
            assert_eq!(response.status, STATUS_BAD_REQUEST, "{input:?}");
            assert_eq!(
                response.to_json().unwrap(),
                r#"{"error":"Invalid national ID"}"#,
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_from_result() {
        let err = InvalidNationalId::from(ParseError::StructuralMismatch(Field::Gender));
        let response = Response::from(Err(err));
        assert!(!response.is_success());
        assert_eq!(
            response.body,
            Body::Error {
                error: INVALID_NATIONAL_ID
            }
        );
    }

    #[test]
    fn test_route_has_path_parameter() {
        assert!(ROUTE.contains("{national_id}"));
    }
}
