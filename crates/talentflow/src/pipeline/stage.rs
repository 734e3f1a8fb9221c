use serde::{Deserialize, Serialize};

/// Hiring pipeline stages in column order.
///
/// Declaration order is load-bearing: `Ord` drives column layout and the
/// "how far along is this candidate" comparisons, so new stages must be
/// inserted at the position they occupy on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    New,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
    Withdrawn,
}

impl Stage {
    /// Every stage, in board column order.
    pub const ORDERED: [Stage; 7] = [
        Stage::New,
        Stage::Screening,
        Stage::Interview,
        Stage::Offer,
        Stage::Hired,
        Stage::Rejected,
        Stage::Withdrawn,
    ];

    /// Stable wire label matching the serde representation.
    pub const fn label(self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Screening => "screening",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
            Stage::Rejected => "rejected",
            Stage::Withdrawn => "withdrawn",
        }
    }

    /// Human-facing column heading.
    pub const fn display_name(self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Screening => "Screening",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
            Stage::Rejected => "Rejected",
            Stage::Withdrawn => "Withdrawn",
        }
    }

    /// Terminal stages end a candidate's run through the pipeline.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Hired | Stage::Rejected | Stage::Withdrawn)
    }

    /// Parse a wire label back into a stage.
    pub fn parse(value: &str) -> Option<Stage> {
        let normalized = value.trim().to_ascii_lowercase();
        Stage::ORDERED
            .into_iter()
            .find(|stage| stage.label() == normalized)
    }
}
