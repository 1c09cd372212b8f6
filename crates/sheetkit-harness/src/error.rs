use sheetkit_widgets::SheetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors surfaced by the harness and the replay binary.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Reading the script or writing the trace failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The script was not valid JSON for a [`ReplayScript`](crate::ReplayScript).
    #[error("script parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sheet refused to mount.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),
}

impl HarnessError {
    /// Process exit code for `sheet-replay`.
    ///
    /// Every harness error is a script failure; usage errors never reach
    /// here because argument parsing exits with 2 on its own.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) | Self::Json(_) | Self::Sheet(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn script_failures_exit_with_one() {
        assert_eq!(HarnessError::Sheet(SheetError::EmptySnapPoints).exit_code(), 1);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(HarnessError::from(io).exit_code(), 1);
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(HarnessError::from(json).exit_code(), 1);
    }

    #[test]
    fn source_chain() {
        let err = HarnessError::from(SheetError::EmptySnapPoints);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("sheet error"));
    }
}
