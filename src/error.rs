use thiserror::Error;

/// Errors raised while extracting and rendering a schedule
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Date text does not follow the `Mon, 02 Jan 2006` layout.
    #[error("{}malformed date '{text}': {reason}", block_prefix(.block))]
    MalformedDate {
        block: Option<usize>,
        text: String,
        reason: String,
    },

    /// A configured CSS selector does not compile.
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn block_prefix(block: &Option<usize>) -> String {
    match block {
        Some(index) => format!("day block {index}: "),
        None => String::new(),
    }
}

impl ScheduleError {
    pub(crate) fn malformed(text: &str, reason: impl Into<String>) -> Self {
        ScheduleError::MalformedDate {
            block: None,
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach the position of the offending day block
    pub(crate) fn in_block(self, index: usize) -> Self {
        match self {
            ScheduleError::MalformedDate { text, reason, .. } => ScheduleError::MalformedDate {
                block: Some(index),
                text,
                reason,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_message() {
        let err = ScheduleError::malformed("garbage", "unexpected layout");
        assert_eq!(err.to_string(), "malformed date 'garbage': unexpected layout");

        let err = err.in_block(3);
        assert_eq!(
            err.to_string(),
            "day block 3: malformed date 'garbage': unexpected layout"
        );
    }
}
