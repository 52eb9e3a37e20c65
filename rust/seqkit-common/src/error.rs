use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn empty_container(container: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyContainer {
                container: container.into(),
            }
            .into(),
        )
    }

    /// Error returned when an absent optional value is unwrapped through a
    /// fallible accessor. `T` is only used for the message.
    pub fn value_not_present<T: ?Sized>() -> Error {
        Error(
            ErrorKind::ValueNotPresent {
                type_name: std::any::type_name::<T>().to_string(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{container} is empty")]
    EmptyContainer { container: String },

    #[error("Optional<{type_name}> has no valid value")]
    ValueNotPresent { type_name: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::invalid_arg("index", "index >= 0");
        assert_eq!(err.to_string(), "invalid argument index: index >= 0");

        let err = Error::empty_container("stack");
        assert_eq!(err.to_string(), "stack is empty");

        let err = Error::value_not_present::<i32>();
        assert_eq!(err.to_string(), "Optional<i32> has no valid value");
    }

    #[test]
    fn test_into_kind() {
        let err = Error::empty_container("stack");
        assert!(matches!(err.kind(), ErrorKind::EmptyContainer { .. }));
        match err.into_kind() {
            ErrorKind::EmptyContainer { container } => assert_eq!(container, "stack"),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
