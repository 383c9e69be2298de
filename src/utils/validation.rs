use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Form-level counterpart of `required`. Only an empty value fails, whitespace counts as input.
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SiteError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Same loose shape check a browser applies to `<input type="email">`.
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$")
            .expect("email pattern is valid")
    });

    if !re.is_match(value.trim()) {
        return Err(SiteError::ValidationError {
            message: format!("Please include a valid address in the {} field", field_name),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("relay.endpoint", "https://api.emailjs.com").is_ok());
        assert!(validate_url("relay.endpoint", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("relay.endpoint", "").is_err());
        assert!(validate_url("relay.endpoint", "invalid-url").is_err());
        assert!(validate_url("relay.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Ada").is_ok());
        assert!(validate_required("subject", "   ").is_ok());
        assert!(matches!(
            validate_required("name", ""),
            Err(SiteError::MissingField { field }) if field == "name"
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "ada@example.com").is_ok());
        assert!(validate_email("email", "a@localhost").is_ok());
        assert!(validate_email("email", "ada.example.com").is_err());
        assert!(validate_email("email", "ada@").is_err());
        assert!(validate_email("email", "@example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("level", 100u8, 0, 100).is_ok());
        assert!(validate_range("level", 101u8, 0, 100).is_err());
    }
}
