use super::domain::{Application, ApplicationId};
use super::stage::Stage;

/// Resolved outcome of a drop: move one application to a new stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub application: ApplicationId,
    pub from: Stage,
    pub to: Stage,
}

/// States of an in-progress drag interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        application: ApplicationId,
        origin: Stage,
    },
    OverColumn {
        application: ApplicationId,
        origin: Stage,
        target: Stage,
    },
}

/// Drag-session controller, driven by discrete input events.
///
/// Deliberately independent of any UI toolkit's drag API: callers translate
/// pointer events into `drag_start` / `column_enter` / `column_leave` /
/// `release`. The session never issues remote effects itself; a drop only
/// resolves into an optional [`TransitionRequest`] for the store to execute.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn hovered_target(&self) -> Option<Stage> {
        match &self.state {
            DragState::OverColumn { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Begin dragging an application. A stray second drag-start (possible
    /// when a prior drag never saw its end event) simply restarts the
    /// session with the new card.
    pub fn drag_start(&mut self, application: &Application) {
        self.state = DragState::Dragging {
            application: application.id.clone(),
            origin: application.stage,
        };
    }

    /// Pointer entered a stage column. Updates the drop target; entering the
    /// card's own column is tracked too, so the column can highlight, but the
    /// eventual drop resolves to no request.
    pub fn column_enter(&mut self, stage: Stage) {
        self.state = match std::mem::take(&mut self.state) {
            DragState::Idle => DragState::Idle,
            DragState::Dragging {
                application, origin, ..
            }
            | DragState::OverColumn {
                application, origin, ..
            } => DragState::OverColumn {
                application,
                origin,
                target: stage,
            },
        };
    }

    /// Pointer left a stage column. Only clears the target when the leave
    /// names the currently hovered column; nested elements inside a column
    /// fire spurious leaves for columns already departed.
    pub fn column_leave(&mut self, stage: Stage) {
        self.state = match std::mem::take(&mut self.state) {
            DragState::OverColumn {
                application,
                origin,
                target,
            } if target == stage => DragState::Dragging {
                application,
                origin,
            },
            other => other,
        };
    }

    /// Drop or drag-end: always resets to idle, returning a transition
    /// request only when a differing drop target was committed. Cancellation
    /// paths (Escape, drag leaving the window) land here with no target and
    /// resolve to `None`.
    pub fn release(&mut self) -> Option<TransitionRequest> {
        match std::mem::take(&mut self.state) {
            DragState::OverColumn {
                application,
                origin,
                target,
            } if target != origin => Some(TransitionRequest {
                application,
                from: origin,
                to: target,
            }),
            _ => None,
        }
    }
}
