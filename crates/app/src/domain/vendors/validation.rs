//! Vendor field validation.

use validator::ValidateEmail;

/// Longest address accepted, in characters.
pub(crate) const MAX_EMAIL_LENGTH: usize = 254;

/// Syntactic email check; deliverability is not verified.
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_LENGTH && email.validate_email()
}

/// Builds an `ILIKE` pattern matching `term` as a literal substring.
pub(crate) fn substring_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);

    pattern.push('%');

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
