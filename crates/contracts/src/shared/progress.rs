use serde::{Deserialize, Serialize};

/// State of one row of a progress panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Pending,
    Processing,
    Success,
    Error,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Processing => "processing",
            ItemStatus::Success => "success",
            ItemStatus::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "En attente",
            ItemStatus::Processing => "En cours",
            ItemStatus::Success => "Terminé",
            ItemStatus::Error => "Erreur",
        }
    }
}

/// One category (or document) in a long-running AI operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub name: String,
    pub status: ItemStatus,
    pub count: Option<usize>,
    pub error: Option<String>,
}

impl ProgressItem {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ItemStatus::Pending,
            count: None,
            error: None,
        }
    }
}

/// Progress panel shown during bulk generation and extraction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub percentage: u8,
    pub text: String,
    pub items: Vec<ProgressItem>,
}

impl ProgressState {
    pub fn started(items: Vec<ProgressItem>) -> Self {
        Self {
            percentage: 0,
            text: "Initialisation...".to_string(),
            items,
        }
    }

    /// Final state. Item rows are only replaced when new ones are given.
    pub fn finish(&mut self, text: impl Into<String>, items: Vec<ProgressItem>) {
        self.percentage = 100;
        self.text = text.into();
        if !items.is_empty() {
            self.items = items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_keeps_items_when_none_given() {
        let mut state = ProgressState::started(vec![ProgressItem::pending("Factures")]);
        assert_eq!(state.text, "Initialisation...");

        state.finish("Terminé: 3/3 documents traités", vec![]);
        assert_eq!(state.percentage, 100);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].status.label(), "En attente");
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&ItemStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
