//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty (whitespace-only counts as empty).
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that an identifier is present and non-zero.
pub fn validate_nonzero_id(value: Option<i64>, field_name: &str) -> Result<i64, String> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(format!("{} is required", field_name)),
    }
}

/// Validate that a URL uses the http or https scheme (basic check).
pub fn validate_http_url(url: &str, field_name: &str) -> Result<(), String> {
    validate_not_empty(url, field_name)?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("{} must be an http(s) URL", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hello", "title").is_ok());
        assert_eq!(
            validate_not_empty("", "title"),
            Err("title cannot be empty".to_string())
        );
        assert!(validate_not_empty(" \t\n", "content").is_err());
    }

    #[test]
    fn test_validate_nonzero_id() {
        assert_eq!(validate_nonzero_id(Some(7), "post_id"), Ok(7));
        assert_eq!(validate_nonzero_id(Some(-3), "post_id"), Ok(-3));
        assert_eq!(
            validate_nonzero_id(Some(0), "post_id"),
            Err("post_id is required".to_string())
        );
        assert!(validate_nonzero_id(None, "post_id").is_err());
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("http://localhost:5000", "BLOG_SERVICE_URL").is_ok());
        assert!(validate_http_url("https://auth.example.com/verify", "TOKEN_VERIFY_URL").is_ok());
        assert!(validate_http_url("localhost:5000", "BLOG_SERVICE_URL").is_err());
        assert!(validate_http_url("", "BLOG_SERVICE_URL").is_err());
    }
}
