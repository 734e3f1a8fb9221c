use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::pipeline::{
    Application, ApplicationId, BoardService, BoardSnapshot, CandidateId, GatewayError, Notice,
    Notifier, PipelineGateway, Stage, StageChangeReceipt, VacancyId,
};

pub(super) fn vacancy() -> VacancyId {
    VacancyId("vac-frontend-01".to_string())
}

pub(super) fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn receipt_time() -> DateTime<Utc> {
    ts(25, 9)
}

pub(super) fn application(id: &str, candidate: &str, stage: Stage) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        candidate_id: CandidateId(candidate.to_string()),
        vacancy_id: vacancy(),
        stage,
        rating: None,
        notes: None,
        rejection_reason: None,
        applied_at: ts(1, 9),
        last_stage_change_at: ts(10, 14),
        next_interview_at: None,
        source: "referral".to_string(),
    }
}

/// Board with stages `[new: 3, screening: 2, interview: 0, hired: 1]`.
pub(super) fn seed_applications() -> Vec<Application> {
    vec![
        application("app-1", "cand-ada", Stage::New),
        application("app-2", "cand-brin", Stage::New),
        application("app-3", "cand-cole", Stage::New),
        application("app-4", "cand-dara", Stage::Screening),
        application("app-5", "cand-egan", Stage::Screening),
        application("app-6", "cand-finn", Stage::Hired),
    ]
}

#[derive(Default)]
pub(super) struct StubGateway {
    applications: Mutex<Vec<Application>>,
    fail_moves: Mutex<HashSet<String>>,
    move_error: Mutex<Option<GatewayError>>,
    fail_fetch: AtomicBool,
    corrupt_total: AtomicBool,
    moves_seen: Mutex<Vec<(String, Stage)>>,
}

impl StubGateway {
    pub(super) fn seeded() -> Self {
        Self::with_applications(seed_applications())
    }

    pub(super) fn with_applications(applications: Vec<Application>) -> Self {
        let gateway = Self::default();
        *gateway.applications.lock().expect("stub mutex poisoned") = applications;
        gateway
    }

    pub(super) fn fail_move_for(&self, id: &str) {
        self.fail_moves
            .lock()
            .expect("stub mutex poisoned")
            .insert(id.to_string());
    }

    pub(super) fn set_move_error(&self, error: GatewayError) {
        *self.move_error.lock().expect("stub mutex poisoned") = Some(error);
    }

    pub(super) fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::Relaxed);
    }

    pub(super) fn set_corrupt_total(&self, corrupt: bool) {
        self.corrupt_total.store(corrupt, Ordering::Relaxed);
    }

    pub(super) fn moves_seen(&self) -> Vec<(String, Stage)> {
        self.moves_seen.lock().expect("stub mutex poisoned").clone()
    }

    pub(super) fn remaining(&self) -> Vec<Application> {
        self.applications.lock().expect("stub mutex poisoned").clone()
    }

    fn move_failure(&self, id: &ApplicationId) -> Option<GatewayError> {
        let failing = self.fail_moves.lock().expect("stub mutex poisoned");
        if failing.contains(&id.0) {
            let configured = self.move_error.lock().expect("stub mutex poisoned");
            Some(
                configured
                    .clone()
                    .unwrap_or_else(|| GatewayError::Transport("backend rejected move".to_string())),
            )
        } else {
            None
        }
    }
}

#[async_trait]
impl PipelineGateway for StubGateway {
    async fn fetch_board(&self, vacancy_id: &VacancyId) -> Result<BoardSnapshot, GatewayError> {
        if self.fail_fetch.load(Ordering::Relaxed) {
            return Err(GatewayError::Transport("board fetch timed out".to_string()));
        }
        let applications = self.applications.lock().expect("stub mutex poisoned").clone();
        let mut total = applications.len();
        if self.corrupt_total.load(Ordering::Relaxed) {
            total += 1;
        }
        Ok(BoardSnapshot {
            vacancy_id: vacancy_id.clone(),
            applications,
            total,
        })
    }

    async fn move_application(
        &self,
        application: &ApplicationId,
        target: Stage,
    ) -> Result<StageChangeReceipt, GatewayError> {
        self.moves_seen
            .lock()
            .expect("stub mutex poisoned")
            .push((application.0.clone(), target));

        if let Some(error) = self.move_failure(application) {
            return Err(error);
        }

        let mut applications = self.applications.lock().expect("stub mutex poisoned");
        let app = applications
            .iter_mut()
            .find(|app| &app.id == application)
            .ok_or(GatewayError::NotFound)?;
        app.stage = target;
        app.last_stage_change_at = receipt_time();

        Ok(StageChangeReceipt {
            application_id: application.clone(),
            stage: target,
            changed_at: receipt_time(),
        })
    }

    async fn remove_application(&self, application: &ApplicationId) -> Result<(), GatewayError> {
        let mut applications = self.applications.lock().expect("stub mutex poisoned");
        let before = applications.len();
        applications.retain(|app| &app.id != application);
        if applications.len() == before {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
    }
}

pub(super) type TestService = BoardService<StubGateway, RecordingNotifier>;

pub(super) fn build_service() -> (Arc<TestService>, Arc<StubGateway>, Arc<RecordingNotifier>) {
    let gateway = Arc::new(StubGateway::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(BoardService::new(gateway.clone(), notifier.clone()));
    (service, gateway, notifier)
}
