//! Drag gesture state for moving document cards between containers.
//!
//! One gesture at a time: a new `start` replaces the captured card.

/// Container a card can be dropped on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    Uncategorized,
    Category(String),
}

impl DropTarget {
    pub fn from_category(category: Option<&str>) -> Self {
        match category.filter(|c| !c.is_empty()) {
            Some(name) => DropTarget::Category(name.to_string()),
            None => DropTarget::Uncategorized,
        }
    }

    /// Value of the document `category` field for this container
    pub fn category(&self) -> Option<&str> {
        match self {
            DropTarget::Uncategorized => None,
            DropTarget::Category(name) => Some(name.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        doc_id: String,
        source: DropTarget,
        /// Container currently showing the drag-over affordance
        hover: Option<DropTarget>,
    },
}

/// Move requested by a completed drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub doc_id: String,
    pub from: DropTarget,
    pub to: DropTarget,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Card being dragged, if any
    pub fn dragged(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { doc_id, .. } => Some(doc_id.as_str()),
            DragState::Idle => None,
        }
    }

    pub fn is_hovered(&self, target: &DropTarget) -> bool {
        matches!(&self.state, DragState::Dragging { hover: Some(h), .. } if h == target)
    }

    /// `dragstart`
    pub fn start(&mut self, doc_id: impl Into<String>, source: DropTarget) {
        self.state = DragState::Dragging {
            doc_id: doc_id.into(),
            source,
            hover: None,
        };
    }

    /// `dragover`. Returns true when the target accepts the drop.
    pub fn over(&mut self, target: DropTarget) -> bool {
        match &mut self.state {
            DragState::Dragging { hover, .. } => {
                *hover = Some(target);
                true
            }
            DragState::Idle => false,
        }
    }

    /// `dragleave`. Only clears the affordance of the container being left.
    pub fn leave(&mut self, target: &DropTarget) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            if hover.as_ref() == Some(target) {
                *hover = None;
            }
        }
    }

    /// `drop`. `None` means the drop landed outside any container.
    /// Dropping back on the source container yields no move.
    pub fn drop(&mut self, target: Option<DropTarget>) -> Option<MoveIntent> {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging { doc_id, source, .. } = state else {
            return None;
        };
        let to = target?;
        if to == source {
            return None;
        }
        Some(MoveIntent {
            doc_id,
            from: source,
            to,
        })
    }

    /// `dragend`, fired after `drop` or when the gesture is cancelled
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str) -> DropTarget {
        DropTarget::Category(name.to_string())
    }

    #[test]
    fn test_drop_on_category_yields_move() {
        let mut dnd = DragController::new();
        dnd.start("d1", DropTarget::Uncategorized);
        assert!(dnd.over(cat("Factures")));
        assert!(dnd.is_hovered(&cat("Factures")));

        let intent = dnd.drop(Some(cat("Factures"))).unwrap();
        assert_eq!(intent.doc_id, "d1");
        assert_eq!(intent.from, DropTarget::Uncategorized);
        assert_eq!(intent.to.category(), Some("Factures"));
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_drop_outside_discards() {
        let mut dnd = DragController::new();
        dnd.start("d1", cat("Notes"));
        assert_eq!(dnd.drop(None), None);
        assert_eq!(dnd.state(), &DragState::Idle);
    }

    #[test]
    fn test_drop_on_source_is_noop() {
        let mut dnd = DragController::new();
        dnd.start("d1", cat("Notes"));
        assert_eq!(dnd.drop(Some(cat("Notes"))), None);
    }

    #[test]
    fn test_leave_clears_only_matching_hover() {
        let mut dnd = DragController::new();
        dnd.start("d1", DropTarget::Uncategorized);
        dnd.over(cat("A"));
        dnd.leave(&cat("B"));
        assert!(dnd.is_hovered(&cat("A")));
        dnd.leave(&cat("A"));
        assert!(!dnd.is_hovered(&cat("A")));
    }

    #[test]
    fn test_second_start_overwrites_first() {
        let mut dnd = DragController::new();
        dnd.start("d1", DropTarget::Uncategorized);
        dnd.start("d2", cat("A"));
        assert_eq!(dnd.dragged(), Some("d2"));
        let intent = dnd.drop(Some(DropTarget::Uncategorized)).unwrap();
        assert_eq!(intent.doc_id, "d2");
    }

    #[test]
    fn test_idle_ignores_events() {
        let mut dnd = DragController::new();
        assert!(!dnd.over(cat("A")));
        assert_eq!(dnd.drop(Some(cat("A"))), None);
        dnd.start("d1", cat("A"));
        dnd.end();
        assert_eq!(dnd.drop(Some(cat("B"))), None);
    }
}
