//! Error taxonomy shared by the stores and the remote client.
//!
//! Validation failures block an action before any request is issued.
//! Remote failures come back from the backend or the transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every backend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Client-side validation failure. Display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Veuillez entrer un nom de catégorie")]
    EmptyCategoryName,

    #[error("Cette catégorie existe déjà")]
    DuplicateCategory(String),

    #[error("Catégorie inconnue : {0}")]
    UnknownCategory(String),

    #[error("Veuillez entrer un nom de champ")]
    EmptyFieldName,

    #[error("Un champ avec ce nom existe déjà")]
    DuplicateField(String),

    #[error("Champ inconnu : {field}")]
    UnknownField { category: String, field: String },

    #[error("Veuillez entrer une valeur")]
    EmptyAllowedValue,

    #[error("Cette valeur existe déjà")]
    DuplicateAllowedValue(String),

    #[error("Le nombre de champs doit être entre 5 et 10")]
    FieldCountOutOfRange(i64),

    #[error("Document introuvable : {0}")]
    UnknownDocument(String),

    #[error("Aucune catégorie trouvée")]
    NoCategories,

    #[error("Veuillez d'abord créer des catégories ou faire un clustering automatique")]
    NoTargetCategories,

    #[error("Tous les documents sont déjà catégorisés")]
    AllDocumentsCategorized,

    #[error("Tous les champs ont déjà une description")]
    AllFieldsDescribed,

    #[error("Aucun document à traiter")]
    NoDocuments,

    #[error("Veuillez entrer votre clé API Mistral ou la configurer dans les paramètres")]
    MissingApiKey,

    #[error("Veuillez entrer une clé API")]
    EmptyApiKey,

    #[error("Aucune modification à sauvegarder")]
    NothingToSave,

    #[error("Veuillez sélectionner une colonne pour le texte")]
    MissingTextColumn,

    #[error("Aucun fichier sélectionné")]
    NoFileSelected,

    #[error("Fichier JSON invalide : {0}")]
    InvalidCatalogFile(String),
}

impl ValidationError {
    /// Refusals that describe a state rather than a mistake are shown as info
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            ValidationError::AllDocumentsCategorized
                | ValidationError::AllFieldsDescribed
                | ValidationError::NothingToSave
        )
    }
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or no response arrived
    #[error("Erreur réseau : {0}")]
    Network(String),

    /// Non-2xx response; `message` is the backend `error` field verbatim
    #[error("{message}")]
    Application { status: u16, message: String },

    /// Success status with a body that does not match the contract
    #[error("Réponse invalide du serveur : {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds an application error from a raw error body.
    /// Bodies that are not `{error}` fall back to the HTTP status.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|r| r.error)
            .unwrap_or_else(|_| format!("HTTP {}", status));
        ApiError::Application { status, message }
    }

    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Application { .. })
    }
}

/// Any failure of a user action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl ClientError {
    /// Message for the status notifier.
    ///
    /// `label` names the failed action ("Erreur lors de la sauvegarde").
    /// Application errors are appended verbatim; transport errors show the
    /// label alone.
    pub fn user_message(&self, label: &str) -> String {
        match self {
            ClientError::Validation(e) => e.to_string(),
            ClientError::Remote(e) if e.is_transport() => label.to_string(),
            ClientError::Remote(e) => format!("{}: {}", label, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_uses_error_field() {
        let err = ApiError::from_body(400, r#"{"error": "Aucun fichier sélectionné"}"#);
        assert_eq!(
            err,
            ApiError::Application {
                status: 400,
                message: "Aucun fichier sélectionné".into()
            }
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_from_body_falls_back_to_status() {
        let err = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_user_message_per_kind() {
        let app: ClientError = ApiError::Application {
            status: 500,
            message: "clé invalide".into(),
        }
        .into();
        assert_eq!(
            app.user_message("Erreur lors du clustering"),
            "Erreur lors du clustering: clé invalide"
        );

        let net: ClientError = ApiError::Network("connection refused".into()).into();
        assert_eq!(
            net.user_message("Erreur lors du clustering"),
            "Erreur lors du clustering"
        );

        let decode: ClientError = ApiError::Decode("expected `documents`".into()).into();
        assert_eq!(decode.user_message("Erreur lors du chargement"), "Erreur lors du chargement");

        let val: ClientError = ValidationError::EmptyCategoryName.into();
        assert_eq!(val.user_message("ignoré"), "Veuillez entrer un nom de catégorie");
    }

    #[test]
    fn test_informational_refusals() {
        assert!(ValidationError::NothingToSave.is_informational());
        assert!(!ValidationError::DuplicateCategory("x".into()).is_informational());
    }
}
