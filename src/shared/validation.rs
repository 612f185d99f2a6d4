use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slugs (the external lookup key of every entity)
    /// Must be lowercase alphanumeric with single hyphens between words
    /// - Valid: "apple", "iphone-11", "iphone-11-battery-replacement"
    /// - Invalid: "-apple", "apple-", "iphone--11", "iPhone", "iphone_11"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("apple"));
        assert!(SLUG_REGEX.is_match("iphone-11"));
        assert!(SLUG_REGEX.is_match("iphone-11-battery-replacement"));
        assert!(SLUG_REGEX.is_match("pixel-7"));
        assert!(SLUG_REGEX.is_match("a"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-apple")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("apple-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("iphone--11")); // double hyphen
        assert!(!SLUG_REGEX.is_match("iPhone")); // uppercase
        assert!(!SLUG_REGEX.is_match("iphone_11")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("iphone 11")); // space
    }
}
