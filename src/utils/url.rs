//! URL validation.
//!
//! Problem links come from the solution files themselves, so they are
//! checked against a domain allow-list before being rendered as links.

use crate::config::ALLOWED_PROBLEM_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to link
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

/// Validate a problem link.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a valid host
/// 4. Host is in the allowed domains list
pub fn validate_problem_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = extract_host(url) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// The link if it passes validation.
pub fn safe_problem_url(url: &str) -> Option<String> {
    match validate_problem_url(url) {
        UrlValidation::Valid(url) => Some(url),
        UrlValidation::Invalid(_) => None,
    }
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Host part ends at the first path, query or fragment delimiter
    let host_part = without_protocol.split(['/', '?', '#']).next()?;
    let host = host_part.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

/// Check if a domain is in the allowed list (subdomains included)
fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_PROBLEM_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(matches!(
            validate_problem_url("https://leetcode.com/problems/cat-and-mouse/"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_problem_url("https://open.kattis.com/problems/forestforthetrees"),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_problem_url("https://www.adventofcode.com/2025/day/1"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            validate_problem_url(""),
            UrlValidation::Invalid(UrlValidationError::Empty)
        ));
        assert!(matches!(
            validate_problem_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        ));
        assert!(matches!(
            validate_problem_url("https://evil.com/leetcode.com"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
        assert_eq!(safe_problem_url("https://notleetcode.com/x"), None);
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://open.kattis.com:443/problems"),
            Some("open.kattis.com".to_string())
        );
        assert_eq!(
            extract_host("https://leetcode.com?x=1"),
            Some("leetcode.com".to_string())
        );
        assert_eq!(extract_host("https://"), None);
    }
}
