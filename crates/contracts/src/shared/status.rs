use crate::shared::error::ClientError;

/// Severity of a status message; also its CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Transient message shown on top of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Message for a failed action, see [`ClientError::user_message`]
    pub fn from_error(err: &ClientError, label: &str) -> Self {
        let kind = match err {
            ClientError::Validation(v) if v.is_informational() => StatusKind::Info,
            _ => StatusKind::Error,
        };
        Self {
            kind,
            text: err.user_message(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{ApiError, ValidationError};

    #[test]
    fn test_from_error_kinds() {
        let info = StatusMessage::from_error(&ValidationError::AllFieldsDescribed.into(), "x");
        assert_eq!(info.kind, StatusKind::Info);
        assert_eq!(info.text, "Tous les champs ont déjà une description");

        let remote = StatusMessage::from_error(
            &ApiError::Application {
                status: 400,
                message: "Document invalide".into(),
            }
            .into(),
            "Erreur lors de la sauvegarde",
        );
        assert_eq!(remote.kind, StatusKind::Error);
        assert_eq!(remote.text, "Erreur lors de la sauvegarde: Document invalide");
    }
}
