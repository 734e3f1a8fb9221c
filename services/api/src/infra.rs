use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use talentflow::pipeline::{
    Application, ApplicationId, BoardSnapshot, CandidateId, GatewayError, Notice, Notifier,
    PipelineGateway, Rating, Severity, Stage, StageChangeReceipt, VacancyId,
};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the recruiting backend, keyed by vacancy.
///
/// Good enough for local serving and the CLI demo: moves and removals are
/// applied to the stored board, and individual applications can be marked to
/// fail their next move so the snap-back path is demonstrable.
#[derive(Default)]
pub(crate) struct InMemoryPipelineGateway {
    boards: Mutex<HashMap<VacancyId, Vec<Application>>>,
    failing_moves: Mutex<HashSet<ApplicationId>>,
}

impl InMemoryPipelineGateway {
    pub(crate) fn with_seed_data() -> Self {
        let gateway = Self::default();
        let vacancy = demo_vacancy();
        gateway
            .boards
            .lock()
            .expect("gateway mutex poisoned")
            .insert(vacancy.clone(), demo_applications(&vacancy));
        gateway
    }

    pub(crate) fn fail_move_for(&self, application: &ApplicationId) {
        self.failing_moves
            .lock()
            .expect("gateway mutex poisoned")
            .insert(application.clone());
    }
}

#[async_trait]
impl PipelineGateway for InMemoryPipelineGateway {
    async fn fetch_board(&self, vacancy: &VacancyId) -> Result<BoardSnapshot, GatewayError> {
        let boards = self.boards.lock().expect("gateway mutex poisoned");
        let applications = boards.get(vacancy).cloned().ok_or(GatewayError::NotFound)?;
        Ok(BoardSnapshot {
            vacancy_id: vacancy.clone(),
            total: applications.len(),
            applications,
        })
    }

    async fn move_application(
        &self,
        application: &ApplicationId,
        target: Stage,
    ) -> Result<StageChangeReceipt, GatewayError> {
        if self
            .failing_moves
            .lock()
            .expect("gateway mutex poisoned")
            .contains(application)
        {
            return Err(GatewayError::Transport(
                "recruiting backend unavailable".to_string(),
            ));
        }

        let mut boards = self.boards.lock().expect("gateway mutex poisoned");
        let app = boards
            .values_mut()
            .flat_map(|board| board.iter_mut())
            .find(|app| &app.id == application)
            .ok_or(GatewayError::NotFound)?;

        let changed_at = Utc::now();
        app.stage = target;
        app.last_stage_change_at = changed_at;

        Ok(StageChangeReceipt {
            application_id: application.clone(),
            stage: target,
            changed_at,
        })
    }

    async fn remove_application(&self, application: &ApplicationId) -> Result<(), GatewayError> {
        let mut boards = self.boards.lock().expect("gateway mutex poisoned");
        for board in boards.values_mut() {
            let before = board.len();
            board.retain(|app| &app.id != application);
            if board.len() != before {
                return Ok(());
            }
        }
        Err(GatewayError::NotFound)
    }
}

/// Notifier that forwards toasts into the service log; the HTTP surface has
/// no browser to toast at.
#[derive(Default)]
pub(crate) struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Success => info!(message = %notice.message, "notification"),
            Severity::Error => warn!(message = %notice.message, "notification"),
        }
    }
}

pub(crate) fn demo_vacancy() -> VacancyId {
    VacancyId("vac-senior-backend".to_string())
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

fn seed_application(
    id: &str,
    candidate: &str,
    vacancy: &VacancyId,
    stage: Stage,
    source: &str,
    applied_day: u32,
) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        candidate_id: CandidateId(candidate.to_string()),
        vacancy_id: vacancy.clone(),
        stage,
        rating: None,
        notes: None,
        rejection_reason: None,
        applied_at: at(applied_day, 9),
        last_stage_change_at: at(applied_day, 9),
        next_interview_at: None,
        source: source.to_string(),
    }
}

fn demo_applications(vacancy: &VacancyId) -> Vec<Application> {
    let mut applications = vec![
        seed_application("app-001", "cand-ada", vacancy, Stage::New, "referral", 3),
        seed_application("app-002", "cand-brin", vacancy, Stage::New, "linkedin", 4),
        seed_application("app-003", "cand-cole", vacancy, Stage::New, "job board", 5),
        seed_application("app-004", "cand-dara", vacancy, Stage::Screening, "referral", 6),
        seed_application("app-005", "cand-egan", vacancy, Stage::Screening, "website", 8),
        seed_application("app-006", "cand-finn", vacancy, Stage::Interview, "linkedin", 10),
        seed_application("app-007", "cand-gale", vacancy, Stage::Offer, "referral", 12),
        seed_application("app-008", "cand-hana", vacancy, Stage::Hired, "agency", 14),
    ];

    if let Some(interviewing) = applications.iter_mut().find(|app| app.id.0 == "app-006") {
        interviewing.rating = Rating::new(4).ok();
        interviewing.next_interview_at = Some(at(28, 14));
        interviewing.notes = Some("Strong systems background; pair session pending".to_string());
    }

    applications
}
