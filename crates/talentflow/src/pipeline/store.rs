use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::board::Board;
use super::bulk::BulkOutcome;
use super::domain::{Application, ApplicationId, TransitionPhase, VacancyId};
use super::gateway::{GatewayError, Notice, Notifier, PipelineGateway};
use super::stage::Stage;

/// Owner of the application set for the selected vacancy.
///
/// Every mutation funnels through here: the board is derived state and the
/// drag session only produces transition requests. Local state changes only
/// after the gateway confirms, so a rejected transition needs no rollback.
///
/// The state lock is never held across an await; concurrent transitions for
/// different applications interleave freely, and rapid moves on the same
/// application resolve last-response-wins.
pub struct BoardService<G, N> {
    gateway: Arc<G>,
    notifier: Arc<N>,
    state: Mutex<BoardState>,
}

#[derive(Default)]
struct BoardState {
    vacancy: Option<VacancyId>,
    applications: Vec<Application>,
    phases: HashMap<ApplicationId, TransitionPhase>,
}

/// Result of a single stage-change request.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved {
        stage: Stage,
        changed_at: DateTime<Utc>,
    },
    /// The application was already in the requested stage; nothing was
    /// issued, mutated, or announced.
    AlreadyInStage,
}

/// Errors raised by the board store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unknown application '{}'", (.0).0)]
    UnknownApplication(ApplicationId),
    #[error("board fetch failed: {source}")]
    Fetch { source: GatewayError },
    #[error("stage change failed: {source}")]
    Transition { source: GatewayError },
    #[error("removal failed: {source}")]
    Removal { source: GatewayError },
    #[error("board snapshot claims {total} applications but carries {actual}")]
    InconsistentSnapshot { total: usize, actual: usize },
}

impl<G, N> BoardService<G, N>
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self {
            gateway,
            notifier,
            state: Mutex::new(BoardState::default()),
        }
    }

    /// Replace local state wholesale with a fresh snapshot for `vacancy`.
    ///
    /// On any failure, including a snapshot whose claimed total does not
    /// partition into its applications, prior state stays intact so the
    /// caller can keep rendering the last good board while offering a retry.
    pub async fn fetch_board(&self, vacancy: &VacancyId) -> Result<Board, StoreError> {
        let snapshot = self
            .gateway
            .fetch_board(vacancy)
            .await
            .map_err(|source| StoreError::Fetch { source })?;

        if snapshot.total != snapshot.applications.len() {
            warn!(
                vacancy = %vacancy.0,
                claimed = snapshot.total,
                actual = snapshot.applications.len(),
                "discarding inconsistent board snapshot"
            );
            return Err(StoreError::InconsistentSnapshot {
                total: snapshot.total,
                actual: snapshot.applications.len(),
            });
        }

        let mut state = self.lock_state();
        state.vacancy = Some(snapshot.vacancy_id);
        state.applications = snapshot.applications;
        state.phases.clear();
        info!(vacancy = %vacancy.0, total = state.applications.len(), "board loaded");
        Ok(Board::assemble(&state.applications))
    }

    /// Assemble the board from current local state.
    pub fn board(&self) -> Board {
        Board::assemble(&self.lock_state().applications)
    }

    pub fn vacancy(&self) -> Option<VacancyId> {
        self.lock_state().vacancy.clone()
    }

    /// Phase of the most recent transition issued for `application`, if any.
    pub fn transition_phase(&self, application: &ApplicationId) -> Option<TransitionPhase> {
        self.lock_state().phases.get(application).copied()
    }

    /// Move one application to `target` with user-visible notifications.
    ///
    /// Same-stage requests short-circuit before any remote call or notice.
    pub async fn move_application(
        &self,
        application: &ApplicationId,
        target: Stage,
    ) -> Result<MoveOutcome, StoreError> {
        let outcome = self.execute_move(application, target).await;
        match &outcome {
            Ok(MoveOutcome::Moved { stage, .. }) => {
                self.notifier
                    .notify(Notice::success(format!("Moved to {}", stage.display_name())));
            }
            Ok(MoveOutcome::AlreadyInStage) => {}
            Err(err) => {
                self.notifier.notify(Notice::error(format!(
                    "Could not move to {}: {err}",
                    target.display_name()
                )));
            }
        }
        outcome
    }

    /// Remove an application from the vacancy; the candidate record itself
    /// is unaffected. Not a stage transition.
    pub async fn remove_application(&self, application: &ApplicationId) -> Result<(), StoreError> {
        match self.execute_remove(application).await {
            Ok(()) => {
                self.notifier
                    .notify(Notice::success("Candidate removed from vacancy"));
                Ok(())
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::error(format!("Could not remove candidate: {err}")));
                Err(err)
            }
        }
    }

    /// Move many applications, attempting each independently and reporting
    /// the aggregate instead of per-unit toasts.
    pub async fn bulk_move(&self, applications: &[ApplicationId], target: Stage) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for application in applications {
            match self.execute_move(application, target).await {
                Ok(_) => outcome.record_success(application.clone()),
                Err(err) => outcome.record_failure(application.clone(), err.to_string()),
            }
        }
        self.announce_bulk(&outcome, &format!("moved to {}", target.display_name()));
        outcome
    }

    /// Remove many applications with the same independent-unit semantics.
    pub async fn bulk_remove(&self, applications: &[ApplicationId]) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for application in applications {
            match self.execute_remove(application).await {
                Ok(()) => outcome.record_success(application.clone()),
                Err(err) => outcome.record_failure(application.clone(), err.to_string()),
            }
        }
        self.announce_bulk(&outcome, "removed");
        outcome
    }

    fn announce_bulk(&self, outcome: &BulkOutcome, action: &str) {
        self.notifier.notify(Notice::success(format!(
            "{} application(s) {action}",
            outcome.succeeded.len()
        )));
        if !outcome.is_clean() {
            self.notifier.notify(Notice::error(format!(
                "{} application(s) failed: {}",
                outcome.failed.len(),
                outcome.summary()
            )));
        }
    }

    async fn execute_move(
        &self,
        application: &ApplicationId,
        target: Stage,
    ) -> Result<MoveOutcome, StoreError> {
        {
            let mut state = self.lock_state();
            let current = state
                .applications
                .iter()
                .find(|app| &app.id == application)
                .ok_or_else(|| StoreError::UnknownApplication(application.clone()))?;
            if current.stage == target {
                return Ok(MoveOutcome::AlreadyInStage);
            }
            state
                .phases
                .insert(application.clone(), TransitionPhase::Pending);
        }

        match self.gateway.move_application(application, target).await {
            Ok(receipt) => {
                let mut state = self.lock_state();
                state
                    .phases
                    .insert(application.clone(), TransitionPhase::Committed);
                // The card may have been removed while the request was in
                // flight; committing then touches nothing.
                if let Some(app) = state
                    .applications
                    .iter_mut()
                    .find(|app| &app.id == application)
                {
                    let leaving_rejected = app.stage == Stage::Rejected;
                    app.stage = receipt.stage;
                    app.last_stage_change_at = receipt.changed_at;
                    if leaving_rejected && receipt.stage != Stage::Rejected {
                        app.rejection_reason = None;
                    }
                }
                info!(
                    application = %application.0,
                    stage = receipt.stage.label(),
                    "stage change committed"
                );
                Ok(MoveOutcome::Moved {
                    stage: receipt.stage,
                    changed_at: receipt.changed_at,
                })
            }
            Err(source) => {
                self.lock_state()
                    .phases
                    .insert(application.clone(), TransitionPhase::Failed);
                warn!(
                    application = %application.0,
                    stage = target.label(),
                    error = %source,
                    "stage change rejected"
                );
                Err(StoreError::Transition { source })
            }
        }
    }

    async fn execute_remove(&self, application: &ApplicationId) -> Result<(), StoreError> {
        {
            let state = self.lock_state();
            if !state.applications.iter().any(|app| &app.id == application) {
                return Err(StoreError::UnknownApplication(application.clone()));
            }
        }

        self.gateway
            .remove_application(application)
            .await
            .map_err(|source| StoreError::Removal { source })?;

        let mut state = self.lock_state();
        state.applications.retain(|app| &app.id != application);
        state.phases.remove(application);
        info!(application = %application.0, "application removed from board");
        Ok(())
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BoardState> {
        self.state.lock().expect("board state mutex poisoned")
    }
}
