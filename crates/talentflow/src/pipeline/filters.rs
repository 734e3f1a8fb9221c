use serde::{Deserialize, Serialize};

use super::domain::CandidateId;

/// Flat candidate-database row used by list views outside the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCard {
    pub candidate_id: CandidateId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CandidateCard {
    fn matches_text(&self, needle: &str) -> bool {
        let haystacks = [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.phone.as_deref(),
            self.position.as_deref(),
            self.company.as_deref(),
        ];

        haystacks
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    fn has_all_tags(&self, selected: &[String]) -> bool {
        selected.iter().all(|wanted| {
            self.tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted))
        })
    }
}

/// Case-insensitive substring match across name, email, phone, position,
/// company, and tags. A blank query keeps every card.
pub fn filter_by_text<'a>(cards: &'a [CandidateCard], query: &str) -> Vec<&'a CandidateCard> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return cards.iter().collect();
    }
    cards
        .iter()
        .filter(|card| card.matches_text(&needle))
        .collect()
}

/// Keep cards carrying every selected tag (logical AND, not OR).
pub fn filter_by_tags<'a>(cards: &'a [CandidateCard], selected: &[String]) -> Vec<&'a CandidateCard> {
    if selected.is_empty() {
        return cards.iter().collect();
    }
    cards
        .iter()
        .filter(|card| card.has_all_tags(selected))
        .collect()
}
