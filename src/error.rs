//! Engine error types

/// Errors surfaced by the engine's fallible operations.
///
/// Only the left (input) side of a pair can be rejected. An invalid right
/// pattern is stored as literal text instead and never reaches this type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The left pattern is not a valid regular expression
    #[error("invalid left pattern `{pattern}`: {source}")]
    InvalidLeftPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A default rule table name was not recognised
    #[error("unknown rule set `{0}` (expected `python` or `go`)")]
    UnknownRuleSet(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_error(pattern: &str) -> Error {
        let source = regex::Regex::new(pattern).unwrap_err();
        Error::InvalidLeftPattern { pattern: pattern.to_string(), source }
    }

    #[test]
    fn invalid_left_pattern_names_the_pattern() {
        let error = compile_error("(unbalanced");
        let msg = error.to_string();
        assert!(msg.starts_with("invalid left pattern `(unbalanced`"));
    }

    #[test]
    fn invalid_left_pattern_keeps_regex_source() {
        let error = compile_error("[z-a]");
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.downcast_ref::<regex::Error>().is_some());
    }

    #[test]
    fn unknown_rule_set_message() {
        let error = Error::UnknownRuleSet("cobol".to_string());
        assert_eq!(error.to_string(), "unknown rule set `cobol` (expected `python` or `go`)");
    }
}
