// Email shape check applied before any notification leaves the process
use regex::Regex;

/// Loose shape check: `local@domain.tld` with no whitespace and a single `@`
/// per segment. Deliberately not RFC 5322.
pub const EMAIL_SHAPE_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone)]
pub struct EmailShape {
    pattern: Regex,
}

impl EmailShape {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(EMAIL_SHAPE_PATTERN)?,
        })
    }

    pub fn is_valid(&self, email: &str) -> bool {
        self.pattern.is_match(email)
    }
}
