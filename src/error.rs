pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Manifest(#[from] serde_json::Error),

    #[error("{0}")]
    Unsupported(String),

    #[error("Empty or missing identifier: {0}")]
    EmptyIdentifier(String),
}

impl Error {
    /// Unsupported-operation failures get the distinctive `Method not
    /// supported:` prefix on the console; everything else is reported raw.
    pub fn console_message(&self) -> String {
        match self {
            Error::Unsupported(_) => format!("Method not supported: {}", self),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    mod error_variants {
        use super::*;

        #[test]
        fn test_io_error_creation() {
            let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
            let err = Error::from(io_err);
            assert!(matches!(err, Error::Io(_)));
            assert!(err.to_string().contains("file not found"));
        }

        #[test]
        fn test_unsupported_error() {
            let err = Error::Unsupported("pointer-returning methods cannot be wrapped".to_string());
            assert!(matches!(err, Error::Unsupported(_)));
            assert_eq!(
                err.to_string(),
                "pointer-returning methods cannot be wrapped"
            );
        }

        #[test]
        fn test_empty_identifier_error() {
            let err = Error::EmptyIdentifier("parameter of SliderFloat".to_string());
            assert!(matches!(err, Error::EmptyIdentifier(_)));
            assert_eq!(
                err.to_string(),
                "Empty or missing identifier: parameter of SliderFloat"
            );
        }

        #[test]
        fn test_manifest_error_from_serde() {
            let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
            let err = Error::from(parse_err);
            assert!(matches!(err, Error::Manifest(_)));
        }
    }

    mod console_messages {
        use super::*;

        #[test]
        fn test_unsupported_gets_prefix() {
            let err = Error::Unsupported("pointer support is not implemented".to_string());
            assert_eq!(
                err.console_message(),
                "Method not supported: pointer support is not implemented"
            );
        }

        #[test]
        fn test_io_error_reported_raw() {
            let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
            let err = Error::from(io_err);
            let msg = err.console_message();
            assert!(!msg.starts_with("Method not supported"));
            assert!(msg.contains("access denied"));
        }

        #[test]
        fn test_empty_identifier_reported_raw() {
            let err = Error::EmptyIdentifier("parameter 2 of Begin".to_string());
            assert!(!err.console_message().starts_with("Method not supported"));
        }
    }

    mod result_type {
        use super::*;

        #[test]
        fn test_result_with_question_mark() {
            fn test_fn() -> Result<String> {
                let err = Error::EmptyIdentifier("test".to_string());
                Err(err)?;
                Ok("success".to_string())
            }

            let result = test_fn();
            assert!(result.is_err());
        }
    }
}
