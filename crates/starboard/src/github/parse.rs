//! Decoders for the three GitHub responses the executor consumes.
//!
//! A 404 is never an error here: it means "nothing there". A missing
//! response (the request itself failed) is treated the same way.

use super::types::{LicenseEnvelope, StarredRepository};
use crate::http::HttpResponse;
use crate::query::QueryError;

/// Decode the starred listing.
///
/// Returns an empty list on 404 or when no response was obtained. Any other
/// body must be a JSON array of repository records.
pub fn parse_listing(
    response: Option<&HttpResponse>,
) -> Result<Vec<StarredRepository>, QueryError> {
    let Some(response) = response else {
        return Ok(Vec::new());
    };
    if response.is_not_found() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&response.body).map_err(|e| QueryError::decode("starred listing", e))
}

/// Readme text, verbatim. `None` on 404 or without a response.
pub fn parse_readme(response: Option<&HttpResponse>) -> Option<String> {
    let response = response.filter(|r| !r.is_not_found())?;
    Some(response.text().into_owned())
}

/// License display name from `license.name`.
///
/// `None` on 404, without a response, or when the body lacks the nested
/// name (logged at `warn`).
pub fn parse_license(response: Option<&HttpResponse>) -> Option<String> {
    let response = response.filter(|r| !r.is_not_found())?;

    match serde_json::from_slice::<LicenseEnvelope>(&response.body) {
        Ok(envelope) => {
            let name = envelope.license.and_then(|license| license.name);
            if name.is_none() {
                tracing::warn!(
                    status = response.status,
                    "License payload has no license.name"
                );
            }
            name
        }
        Err(e) => {
            tracing::warn!(status = response.status, error = %e, "Undecodable license payload");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_not_found_is_empty() {
        let resp = HttpResponse::new(404, r#"{"message":"Not Found"}"#);
        assert!(parse_listing(Some(&resp)).unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_without_response_is_empty() {
        assert!(parse_listing(None).unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_preserves_order() {
        let resp = HttpResponse::new(
            200,
            r#"[{"id": 2, "full_name": "c/d"}, {"id": 1, "full_name": "a/b"}]"#,
        );
        let repos = parse_listing(Some(&resp)).unwrap();
        let ids: Vec<Option<i64>> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
    }

    #[test]
    fn test_parse_listing_rejects_non_array() {
        let resp = HttpResponse::new(403, r#"{"message":"API rate limit exceeded"}"#);
        let err = parse_listing(Some(&resp)).unwrap_err();
        assert!(err.to_string().contains("starred listing"));
    }

    #[test]
    fn test_parse_readme() {
        let resp = HttpResponse::new(200, "<h1>README A</h1>");
        assert_eq!(parse_readme(Some(&resp)).as_deref(), Some("<h1>README A</h1>"));
        assert_eq!(parse_readme(Some(&HttpResponse::new(404, "gone"))), None);
        assert_eq!(parse_readme(None), None);
    }

    #[test]
    fn test_parse_readme_empty_body_is_empty_text() {
        let resp = HttpResponse::new(200, "");
        assert_eq!(parse_readme(Some(&resp)).as_deref(), Some(""));
    }

    #[test]
    fn test_parse_license() {
        let resp = HttpResponse::new(200, r#"{"license": {"name": "MIT"}}"#);
        assert_eq!(parse_license(Some(&resp)).as_deref(), Some("MIT"));
        assert_eq!(parse_license(Some(&HttpResponse::new(404, ""))), None);
        assert_eq!(parse_license(None), None);
    }

    #[test]
    fn test_parse_license_missing_nested_name_is_absent() {
        for body in [r#"{"license": {}}"#, r#"{"message": "Server Error"}"#, "<html>"] {
            assert_eq!(
                parse_license(Some(&HttpResponse::new(200, body))),
                None,
                "body: {body}"
            );
        }
    }
}
