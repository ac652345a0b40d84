use serde::{Deserialize, Serialize};

/// Body of endpoints that only acknowledge (`{}` or `{success: true}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_ack() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert!(!ack.success);
        let ack: Ack =
            serde_json::from_str(r#"{"success": true, "message": "Clé API sauvegardée"}"#).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Clé API sauvegardée"));
    }
}
