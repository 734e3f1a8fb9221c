use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stage::Stage;

/// Identifier wrapper for pipeline applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for candidate records, which outlive any application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for vacancies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacancyId(pub String);

/// Interviewer rating bounded to 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::RatingOutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// One candidate's participation in one vacancy's pipeline.
///
/// `rejection_reason` is meaningful only while `stage` is rejected; the
/// store clears it when an application leaves that stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub candidate_id: CandidateId,
    pub vacancy_id: VacancyId,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub last_stage_change_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_interview_at: Option<DateTime<Utc>>,
    pub source: String,
}

/// Phase of an application's most recent stage transition.
///
/// Local board state mutates only on `Committed`; a `Failed` transition
/// leaves the application exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    Pending,
    Committed,
    Failed,
}

impl TransitionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            TransitionPhase::Pending => "pending",
            TransitionPhase::Committed => "committed",
            TransitionPhase::Failed => "failed",
        }
    }
}

/// Validation errors for pipeline value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("rating {0} is outside the 1..=5 range")]
    RatingOutOfRange(u8),
}
