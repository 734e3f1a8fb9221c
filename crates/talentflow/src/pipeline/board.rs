use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Application, VacancyId};
use super::stage::Stage;

/// Per-vacancy, derived grouping of applications by stage.
///
/// Always recomputed from the application set, never mutated in place, so a
/// failed transition leaves a previously assembled board untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: BTreeMap<Stage, Vec<Application>>,
    total: usize,
}

/// Active tab over the board: every column flattened or one stage's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTab {
    All,
    Stage(Stage),
}

impl StageTab {
    /// Parse the tab query value: `all` (or empty) or a stage label.
    pub fn parse(value: &str) -> Option<StageTab> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "all" {
            return Some(StageTab::All);
        }
        Stage::parse(&normalized).map(StageTab::Stage)
    }
}

/// Count of applications currently sitting in one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

impl Board {
    /// Group applications by stage, preserving the given (fetch) order.
    ///
    /// Every stage gets a column, empty or not, so the partition invariant
    /// holds structurally: each application lands in exactly one column and
    /// the per-stage counts sum to `total`.
    pub fn assemble(applications: &[Application]) -> Board {
        let mut columns: BTreeMap<Stage, Vec<Application>> = Stage::ORDERED
            .into_iter()
            .map(|stage| (stage, Vec::new()))
            .collect();

        for application in applications {
            columns
                .entry(application.stage)
                .or_default()
                .push(application.clone());
        }

        Board {
            total: applications.len(),
            columns,
        }
    }

    pub fn column(&self, stage: Stage) -> &[Application] {
        self.columns
            .get(&stage)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn stage_counts(&self) -> Vec<StageCount> {
        Stage::ORDERED
            .into_iter()
            .map(|stage| StageCount {
                stage,
                count: self.column(stage).len(),
            })
            .collect()
    }

    /// Flattened union of all columns, or a single stage's list.
    pub fn filter_by_stage_tab(&self, tab: StageTab) -> Vec<&Application> {
        match tab {
            StageTab::All => Stage::ORDERED
                .into_iter()
                .flat_map(|stage| self.column(stage).iter())
                .collect(),
            StageTab::Stage(stage) => self.column(stage).iter().collect(),
        }
    }

    /// Render-ready view with columns in pipeline order.
    pub fn view(&self, vacancy_id: &VacancyId) -> BoardView {
        BoardView {
            vacancy_id: vacancy_id.clone(),
            columns: Stage::ORDERED
                .into_iter()
                .map(|stage| ColumnView {
                    stage,
                    heading: stage.display_name(),
                    count: self.column(stage).len(),
                    applications: self.column(stage).to_vec(),
                })
                .collect(),
            total: self.total,
        }
    }
}

/// Serialized board shape for API responses and the demo printer.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub vacancy_id: VacancyId,
    pub columns: Vec<ColumnView>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub stage: Stage,
    pub heading: &'static str,
    pub count: usize,
    pub applications: Vec<Application>,
}
