use crate::pipeline::{filter_by_tags, filter_by_text, CandidateCard, CandidateId};

fn card(name: &str, email: &str, tags: &[&str]) -> CandidateCard {
    CandidateCard {
        candidate_id: CandidateId(format!("cand-{}", name.to_lowercase())),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some("+31 6 1234 5678".to_string()),
        position: Some("Backend Engineer".to_string()),
        company: Some("Initech".to_string()),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn database() -> Vec<CandidateCard> {
    vec![
        card("Ada Veen", "ada@example.com", &["rust", "senior"]),
        card("Brin Kova", "brin@corp.example", &["rust"]),
        card("Cole Haas", "cole@example.org", &["python", "senior"]),
    ]
}

#[test]
fn blank_query_keeps_every_card() {
    let cards = database();
    assert_eq!(filter_by_text(&cards, "").len(), 3);
    assert_eq!(filter_by_text(&cards, "   ").len(), 3);
}

#[test]
fn text_filter_is_case_insensitive_across_fields() {
    let cards = database();

    let by_name = filter_by_text(&cards, "aDa");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Ada Veen");

    let by_email = filter_by_text(&cards, "CORP.EXAMPLE");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Brin Kova");

    // Position and company are shared across the fixture set.
    assert_eq!(filter_by_text(&cards, "backend").len(), 3);
    assert_eq!(filter_by_text(&cards, "initech").len(), 3);
}

#[test]
fn text_filter_reaches_into_tags() {
    let cards = database();
    let by_tag = filter_by_text(&cards, "python");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].name, "Cole Haas");
}

#[test]
fn unmatched_query_returns_nothing() {
    let cards = database();
    assert!(filter_by_text(&cards, "cobol").is_empty());
}

#[test]
fn tag_filter_requires_every_selected_tag() {
    let cards = database();

    let rust_only = filter_by_tags(&cards, &["rust".to_string()]);
    assert_eq!(rust_only.len(), 2);

    // AND semantics: both tags must be present.
    let rust_senior = filter_by_tags(&cards, &["rust".to_string(), "senior".to_string()]);
    assert_eq!(rust_senior.len(), 1);
    assert_eq!(rust_senior[0].name, "Ada Veen");

    let none = filter_by_tags(&cards, &["rust".to_string(), "python".to_string()]);
    assert!(none.is_empty());
}

#[test]
fn empty_tag_selection_keeps_every_card() {
    let cards = database();
    assert_eq!(filter_by_tags(&cards, &[]).len(), 3);
}
