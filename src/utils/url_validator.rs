//! Target URL validation.
//!
//! URLs are stored verbatim; this module only rejects inputs that are not
//! syntactically valid http(s) URLs or exceed the length cap.

use url::Url;

use crate::error::AppError;

/// Maximum accepted target URL length in characters.
pub const MAX_TARGET_URL_LENGTH: usize = 2048;

/// Validates a target URL for shortening.
///
/// Accepts non-empty strings up to [`MAX_TARGET_URL_LENGTH`] characters that
/// parse as an absolute `http` or `https` URL with a host.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] describing the first violated rule.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    if input.is_empty() {
        return Err(AppError::InvalidUrl("URL must not be empty".to_string()));
    }

    if input.len() > MAX_TARGET_URL_LENGTH {
        return Err(AppError::InvalidUrl(format!(
            "URL must be at most {MAX_TARGET_URL_LENGTH} characters, got {}",
            input.len()
        )));
    }

    let url = Url::parse(input).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::InvalidUrl(format!(
                "unsupported scheme '{other}', only http and https are allowed"
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::InvalidUrl("URL must have a host".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_http_and_https() {
        assert!(validate_target_url("http://example.com").is_ok());
        assert!(validate_target_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_accepts_ip_and_port() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_target_url(""),
            Err(AppError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_overlong() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_TARGET_URL_LENGTH));
        assert!(validate_target_url(&url).is_err());
    }

    #[test]
    fn test_accepts_exactly_max_length() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_TARGET_URL_LENGTH - prefix.len()));
        assert_eq!(url.len(), MAX_TARGET_URL_LENGTH);
        assert!(validate_target_url(&url).is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(validate_target_url("not a url").is_err());
        assert!(validate_target_url("example.com").is_err());
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(validate_target_url("ftp://example.com/file").is_err());
        assert!(validate_target_url("javascript:alert(1)").is_err());
        assert!(validate_target_url("file:///etc/passwd").is_err());
    }
}
