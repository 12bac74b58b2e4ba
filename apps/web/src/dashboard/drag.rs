use crate::models::application::{ApplicationId, Status};

/// Drag-and-drop state of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ApplicationId),
}

/// A status mutation requested by dropping a card on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: ApplicationId,
    pub status: Status,
}

impl DragState {
    /// A card drag began. A newer drag replaces any recorded one.
    pub fn start(&mut self, id: ApplicationId) {
        *self = DragState::Dragging(id);
    }

    /// A drop arrived on the `status` column. Always leaves the state `Idle`.
    pub fn drop_on(&mut self, status: Status) -> Option<StatusChange> {
        match std::mem::take(self) {
            DragState::Dragging(id) => Some(StatusChange { id, status }),
            DragState::Idle => None,
        }
    }
}
