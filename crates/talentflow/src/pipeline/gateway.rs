use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Application, ApplicationId, VacancyId};
use super::stage::Stage;

/// Wholesale board payload as the backend returns it.
///
/// `applications` keeps the backend's ordering; the board assembler never
/// re-sorts, so column contents stay deterministic across refetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub vacancy_id: VacancyId,
    pub applications: Vec<Application>,
    pub total: usize,
}

/// Confirmation that the backend durably recorded a stage change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageChangeReceipt {
    pub application_id: ApplicationId,
    pub stage: Stage,
    pub changed_at: DateTime<Utc>,
}

/// Errors surfaced by the remote pipeline backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("application not found")]
    NotFound,
    #[error("stage change rejected as stale")]
    Stale,
    #[error("operation not permitted")]
    PermissionDenied,
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Remote source of truth for boards and stage transitions.
///
/// The store funnels every remote effect through this seam so tests and the
/// demo can swap in scripted backends.
#[async_trait]
pub trait PipelineGateway: Send + Sync {
    async fn fetch_board(&self, vacancy: &VacancyId) -> Result<BoardSnapshot, GatewayError>;

    async fn move_application(
        &self,
        application: &ApplicationId,
        target: Stage,
    ) -> Result<StageChangeReceipt, GatewayError>;

    async fn remove_application(&self, application: &ApplicationId) -> Result<(), GatewayError>;
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// Toast-style notification emitted by the transition executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Outbound hook for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
