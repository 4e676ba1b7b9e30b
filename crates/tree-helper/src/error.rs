use derive_more::{Display, From};

/// Errors raised while turning external JSON into records or configuration
///
/// Tree operations themselves never fail on malformed linkage; only the
/// ingestion helpers report problems.
#[derive(Debug, Display, From)]
pub enum TreeError {
    /// The input text is not valid JSON, or does not match the expected shape
    #[display(fmt = "invalid JSON: {}", _0)]
    Json(serde_json::Error),

    /// The top-level value is not an array of records
    #[display(fmt = "expected an array of records, found {}", found)]
    #[from(ignore)]
    NotAnArray { found: &'static str },

    /// An element of the record array is not a JSON object
    #[display(fmt = "element {} is not a record (found {})", index, found)]
    #[from(ignore)]
    NotARecord { index: usize, found: &'static str },
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = TreeError::NotARecord {
            index: 3,
            found: "number",
        };
        assert_eq!(err.to_string(), "element 3 is not a record (found number)");

        let err = TreeError::NotAnArray { found: "object" };
        assert_eq!(err.to_string(), "expected an array of records, found object");
    }

    #[test]
    fn test_json_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TreeError::from(json_err);
        assert!(err.to_string().starts_with("invalid JSON: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_question_mark_converts_json_errors() {
        fn parse(text: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(text)?)
        }

        assert!(matches!(parse("[1,"), Err(TreeError::Json(_))));
        assert!(parse("[1]").is_ok());
    }
}
