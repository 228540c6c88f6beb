//! Syntactic email address validation
//!
//! Pattern-based structural check only. Deliverability, MX records,
//! quoted local parts and internationalized domains are not considered.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, trace};

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("Failed to compile email regex")
    })
}

/// Email validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailValidatorConfig {
    /// Trim surrounding whitespace before matching
    pub trim_whitespace: bool,
}

impl Default for EmailValidatorConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
        }
    }
}

/// Counts from validating a batch of candidates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailStats {
    pub total: usize,
    pub non_string: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl EmailStats {
    /// Share of all candidates that were valid addresses
    pub fn valid_rate(&self) -> f64 {
        if self.total > 0 {
            self.valid as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

/// Validates email candidates of arbitrary JSON type
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    config: EmailValidatorConfig,
}

impl EmailValidator {
    pub fn new(config: EmailValidatorConfig) -> Self {
        Self { config }
    }

    /// Check a single string candidate
    pub fn is_valid(&self, candidate: &str) -> bool {
        let candidate = if self.config.trim_whitespace {
            candidate.trim()
        } else {
            candidate
        };
        get_email_regex().is_match(candidate)
    }

    /// Number of candidates that are strings and valid addresses
    pub fn count(&self, candidates: &[Value]) -> usize {
        candidates
            .iter()
            .filter_map(Value::as_str)
            .filter(|c| self.is_valid(c))
            .count()
    }

    /// Classify every candidate
    pub fn batch_stats(&self, candidates: &[Value]) -> EmailStats {
        let mut stats = EmailStats {
            total: candidates.len(),
            ..Default::default()
        };

        for (index, candidate) in candidates.iter().enumerate() {
            match candidate.as_str() {
                None => {
                    trace!("Skipping non-string email candidate {}", index);
                    stats.non_string += 1;
                }
                Some(s) if self.is_valid(s) => stats.valid += 1,
                Some(_) => stats.invalid += 1,
            }
        }

        debug!(
            "Validated {} email candidates: {} valid, {} invalid, {} non-string",
            stats.total, stats.valid, stats.invalid, stats.non_string
        );
        stats
    }
}

/// Trim and check a single candidate against the email pattern
pub fn is_valid_email(candidate: &str) -> bool {
    get_email_regex().is_match(candidate.trim())
}

/// Count valid email addresses, skipping non-string entries
pub fn count_valid_emails(emails: &[Value]) -> usize {
    EmailValidator::default().count(emails)
}

/// Count valid email addresses in a list of strings
pub fn count_valid_email_strs(emails: &[&str]) -> usize {
    emails.iter().filter(|e| is_valid_email(e)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty() {
        assert_eq!(count_valid_emails(&[]), 0);
        assert_eq!(count_valid_email_strs(&[]), 0);
    }

    #[test]
    fn test_mixed_candidates() {
        let emails = vec![json!("a@b.com"), json!("bad"), json!(42), json!(" c@d.io ")];
        assert_eq!(count_valid_emails(&emails), 2);
    }

    #[test]
    fn test_plus_and_subdomain() {
        assert_eq!(count_valid_emails(&[json!("A.B+c@sub.domain.co")]), 1);
    }

    #[test]
    fn test_malformed_addresses() {
        let emails = vec![json!("@domain.com"), json!("user@.com"), json!("user@domain.c")];
        assert_eq!(count_valid_emails(&emails), 0);
    }

    #[test]
    fn test_whole_string_must_match() {
        assert!(!is_valid_email("contact me at a@b.com"));
        assert!(!is_valid_email("a@b.com extra"));
        assert!(!is_valid_email("a@b.com\nx@y.org"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.c0m"));
    }

    #[test]
    fn test_blank_strings() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   \t\n"));
    }

    #[test]
    fn test_accepted_shapes() {
        for email in [
            "first.last@example.org",
            "x_y%z-1@host-name.museum",
            "user@localhost.LOCAL",
            "\tpadded@example.com\n",
        ] {
            assert!(is_valid_email(email), "{email:?} should be valid");
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_email("josé@example.com"));
        assert!(!is_valid_email("user@exämple.com"));
    }

    #[test]
    fn test_non_string_values_skipped() {
        let emails = vec![
            json!(null),
            json!(true),
            json!(["a@b.com"]),
            json!({"email": "a@b.com"}),
            json!("ok@fine.net"),
        ];
        assert_eq!(count_valid_emails(&emails), 1);
    }

    #[test]
    fn test_without_trimming() {
        let validator = EmailValidator::new(EmailValidatorConfig {
            trim_whitespace: false,
        });
        assert!(!validator.is_valid(" c@d.io "));
        assert!(validator.is_valid("c@d.io"));
    }

    #[test]
    fn test_batch_stats() {
        let emails = vec![json!("a@b.com"), json!("bad"), json!(42), json!(" c@d.io ")];
        let stats = EmailValidator::default().batch_stats(&emails);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.valid, 2);
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.non_string, 1);
        assert_eq!(stats.valid_rate(), 0.5);
    }

    #[test]
    fn test_str_convenience() {
        assert_eq!(count_valid_email_strs(&["a@b.com", "nope", " c@d.io "]), 2);
    }
}
