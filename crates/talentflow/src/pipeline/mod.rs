//! Kanban pipeline core: board state, drag sessions, and stage transitions.
//!
//! Components layer bottom-up: [`stage`] and [`domain`] define the reference
//! data and entities, [`board`] derives render-ready columns, [`drag`] turns
//! pointer events into transition requests, and [`store`] executes those
//! requests against the remote gateway with confirm-then-apply semantics.

pub mod board;
pub mod bulk;
pub mod domain;
pub mod drag;
pub mod filters;
pub mod gateway;
pub mod router;
pub mod stage;
pub mod store;

#[cfg(test)]
mod tests;

pub use board::{Board, BoardView, ColumnView, StageCount, StageTab};
pub use bulk::{BulkFailure, BulkOutcome};
pub use domain::{
    Application, ApplicationId, CandidateId, DomainError, Rating, TransitionPhase, VacancyId,
};
pub use drag::{DragSession, DragState, TransitionRequest};
pub use filters::{filter_by_tags, filter_by_text, CandidateCard};
pub use gateway::{
    BoardSnapshot, GatewayError, Notice, Notifier, PipelineGateway, Severity, StageChangeReceipt,
};
pub use router::board_router;
pub use stage::Stage;
pub use store::{BoardService, MoveOutcome, StoreError};
