//! Drag-and-drop state machine
//!
//! Mouse press on a card starts a drag carrying that project's id as the
//! payload. Motion updates which column the pointer is over; release over
//! a column yields the pending move, release anywhere else cancels.

use driftboard::{ProjectId, ProjectStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// The drag payload: the id of the card being moved
        project: ProjectId,
        /// Column currently under the pointer, if any
        over: Option<ProjectStatus>,
    },
}

impl DragState {
    /// Start dragging a card
    pub fn start(&mut self, project: ProjectId) {
        *self = Self::Dragging {
            project,
            over: None,
        };
    }

    /// Update the column under the pointer; `None` when the pointer has
    /// left every column
    pub fn drag_over(&mut self, target: Option<ProjectStatus>) {
        if let Self::Dragging { over, .. } = self {
            *over = target;
        }
    }

    /// The column that would receive the drop right now
    pub fn target(&self) -> Option<ProjectStatus> {
        match self {
            Self::Dragging { over, .. } => *over,
            Self::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// End the drag. Returns the move to perform when released over a
    /// column; releases elsewhere cancel silently.
    pub fn release(&mut self) -> Option<(ProjectId, ProjectStatus)> {
        match std::mem::take(self) {
            Self::Dragging {
                project,
                over: Some(status),
            } => Some((project, status)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProjectId {
        ProjectId::from_string(s)
    }

    #[test]
    fn test_press_drag_drop() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());

        drag.start(id("p1"));
        assert!(drag.is_dragging());
        assert_eq!(drag.target(), None);

        drag.drag_over(Some(ProjectStatus::Finished));
        assert_eq!(drag.target(), Some(ProjectStatus::Finished));

        let dropped = drag.release();
        assert_eq!(dropped, Some((id("p1"), ProjectStatus::Finished)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_leave_clears_target() {
        let mut drag = DragState::default();
        drag.start(id("p1"));
        drag.drag_over(Some(ProjectStatus::Active));
        drag.drag_over(None);

        assert_eq!(drag.target(), None);
        assert_eq!(drag.release(), None, "release off-column cancels");
    }

    #[test]
    fn test_release_without_drag_is_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_drag_over_while_idle_is_ignored() {
        let mut drag = DragState::default();
        drag.drag_over(Some(ProjectStatus::Finished));
        assert_eq!(drag.target(), None);
        assert!(!drag.is_dragging());
    }
}
