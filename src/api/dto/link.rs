//! DTOs for link administration.
//!
//! The same input types back the JSON API and the HTML forms.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, LinkPatch, NewLink};

/// One or more non-empty path segments joined by `/`.
///
/// No leading or trailing `/` and no empty segment: the router trims trailing
/// slashes, so such names could never be requested verbatim.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._~-]+(/[A-Za-z0-9._~-]+)*$").expect("valid regex")
});

/// A single lowercase DNS label without dots. Hosts arrive lowercased.
static SUBDOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"));

/// First path segments served by the application itself.
pub const RESERVED_NAMES: &[&str] = &["links", "api", "health", "static"];

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !NAME_REGEX.is_match(name) {
        return Err(error(
            "name_chars",
            "Name must be path segments of letters, digits and . _ ~ - separated by single /",
        ));
    }

    let first_segment = name.split('/').next().unwrap_or(name);
    if RESERVED_NAMES.contains(&first_segment) {
        return Err(error("name_reserved", "Name is reserved"));
    }

    Ok(())
}

fn validate_subdomain(subdomain: &str) -> Result<(), ValidationError> {
    if !SUBDOMAIN_REGEX.is_match(subdomain) {
        return Err(error(
            "subdomain_chars",
            "Subdomain may only contain lowercase letters, digits and -",
        ));
    }
    Ok(())
}

/// Request body for `POST /api/links` and the HTML create/edit forms.
///
/// `branded_link` is not accepted; it is always derived.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct LinkInput {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_name")
    )]
    #[serde(default)]
    pub name: String,

    #[validate(
        length(min = 1, max = 63, message = "Subdomain must be 1-63 characters"),
        custom(function = "validate_subdomain")
    )]
    #[serde(default)]
    pub subdomain: String,

    #[validate(url(message = "Deep link must be a valid URL"))]
    #[serde(default, alias = "deepLink")]
    pub deep_link: String,
}

impl From<LinkInput> for NewLink {
    fn from(input: LinkInput) -> Self {
        Self {
            name: input.name,
            subdomain: input.subdomain,
            deep_link: input.deep_link,
        }
    }
}

impl From<LinkInput> for LinkPatch {
    fn from(input: LinkInput) -> Self {
        Self {
            name: Some(input.name),
            subdomain: Some(input.subdomain),
            deep_link: Some(input.deep_link),
        }
    }
}

impl From<&Link> for LinkInput {
    fn from(link: &Link) -> Self {
        Self {
            name: link.name.clone(),
            subdomain: link.subdomain.clone(),
            deep_link: link.deep_link.clone(),
        }
    }
}

/// Request body for `PATCH /api/links/{id}`.
///
/// All fields are optional; only provided fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_name")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 63, message = "Subdomain must be 1-63 characters"),
        custom(function = "validate_subdomain")
    )]
    pub subdomain: Option<String>,

    #[validate(url(message = "Deep link must be a valid URL"))]
    #[serde(alias = "deepLink")]
    pub deep_link: Option<String>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(req: UpdateLinkRequest) -> Self {
        Self {
            name: req.name,
            subdomain: req.subdomain,
            deep_link: req.deep_link,
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub deep_link: String,
    pub branded_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            name: link.name,
            subdomain: link.subdomain,
            deep_link: link.deep_link,
            branded_link: link.branded_link,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Paginated list of links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub page: u32,
    pub page_size: u32,
    pub total: i64,
    pub items: Vec<LinkResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, subdomain: &str, deep_link: &str) -> LinkInput {
        LinkInput {
            name: name.to_string(),
            subdomain: subdomain.to_string(),
            deep_link: deep_link.to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(
            input("get", "radd", "https://raddonline.com/products/GottaGet")
                .validate()
                .is_ok()
        );
        assert!(
            input("promo/spring-2025", "acme", "https://acme.test/x")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let errors = input("", "", "").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("subdomain"));
        assert!(fields.contains_key("deep_link"));
    }

    #[test]
    fn test_dotted_subdomain_rejected() {
        assert!(
            input("get", "radd.shop", "https://example.com")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_reserved_names_rejected() {
        for name in ["links", "api/v1", "health", "static/app.css"] {
            assert!(
                input(name, "radd", "https://example.com").validate().is_err(),
                "{name} should be reserved"
            );
        }
        assert!(
            input("linkshare", "radd", "https://example.com")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_names_with_empty_segments_rejected() {
        for name in ["get/", "/get", "a//b", "/", "promo/"] {
            assert!(
                input(name, "radd", "https://example.com").validate().is_err(),
                "{name} should be rejected"
            );
        }
        assert!(input("a/b/c", "radd", "https://example.com").validate().is_ok());
    }

    #[test]
    fn test_uppercase_subdomain_rejected() {
        assert!(input("get", "Radd", "https://example.com").validate().is_err());
        assert!(input("get", "radd-2", "https://example.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_deep_link_rejected() {
        assert!(input("get", "radd", "not a url").validate().is_err());
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let req = UpdateLinkRequest {
            name: Some("fetch".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let patch: LinkPatch = req.into();
        assert_eq!(patch.name.as_deref(), Some("fetch"));
        assert!(patch.subdomain.is_none());
        assert!(patch.deep_link.is_none());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let req = UpdateLinkRequest {
            subdomain: Some("bad.sub".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_input_accepts_camel_case_deep_link() {
        let parsed: LinkInput = serde_json::from_value(serde_json::json!({
            "name": "get",
            "subdomain": "radd",
            "deepLink": "https://example.com"
        }))
        .unwrap();

        assert_eq!(parsed.deep_link, "https://example.com");
    }
}
