use crate::infra::{demo_vacancy, InMemoryPipelineGateway};
use clap::Args;
use std::sync::Arc;
use talentflow::config::AppConfig;
use talentflow::error::AppError;
use talentflow::pipeline::{
    filter_by_tags, filter_by_text, Board, BoardService, CandidateCard, CandidateId, DragSession,
    Notice, Notifier, Severity, Stage, VacancyId,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Vacancy to load (defaults to TALENTFLOW_DEFAULT_VACANCY, then the seed vacancy)
    #[arg(long)]
    pub(crate) vacancy: Option<String>,
    /// Skip the candidate-database filter portion of the demo
    #[arg(long)]
    pub(crate) skip_filters: bool,
}

/// Notifier that renders toasts onto stdout for the CLI walkthrough.
#[derive(Default)]
struct ConsoleToasts;

impl Notifier for ConsoleToasts {
    fn notify(&self, notice: Notice) {
        let tag = match notice.severity {
            Severity::Success => "success",
            Severity::Error => "error",
        };
        println!("  toast [{tag}] {}", notice.message);
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let vacancy = args
        .vacancy
        .or(config.board.default_vacancy)
        .map(VacancyId)
        .unwrap_or_else(demo_vacancy);

    println!("Pipeline board demo for vacancy '{}'", vacancy.0);

    let gateway = Arc::new(InMemoryPipelineGateway::with_seed_data());
    let service = Arc::new(BoardService::new(gateway.clone(), Arc::new(ConsoleToasts)));

    let board = service.fetch_board(&vacancy).await?;
    println!("\nInitial board");
    render_board(&board);

    // Drag the oldest new-stage card across the board and drop on interview.
    let Some(card) = board.column(Stage::New).first().cloned() else {
        println!("\nNo new-stage applications to drag; demo ends early.");
        return Ok(());
    };

    println!(
        "\nDragging {} ({}) from New toward Interview...",
        card.id.0, card.candidate_id.0
    );
    let mut session = DragSession::new();
    session.drag_start(&card);
    session.column_enter(Stage::Screening);
    session.column_enter(Stage::Interview);
    if let Some(request) = session.release() {
        service.move_application(&request.application, request.to).await?;
    }
    render_board(&service.board());

    // A rejected transition: the backend refuses, so the card snaps back.
    if let Some(stuck) = service.board().column(Stage::New).first().cloned() {
        println!(
            "\nBackend outage while moving {} to Offer (card snaps back):",
            stuck.id.0
        );
        gateway.fail_move_for(&stuck.id);
        if service.move_application(&stuck.id, Stage::Offer).await.is_err() {
            render_board(&service.board());
        }
    }

    // Bulk stage change across the screening column.
    let screening: Vec<_> = service
        .board()
        .column(Stage::Screening)
        .iter()
        .map(|app| app.id.clone())
        .collect();
    if !screening.is_empty() {
        println!("\nBulk-moving {} screening card(s) to Interview:", screening.len());
        let outcome = service.bulk_move(&screening, Stage::Interview).await;
        println!("  aggregate: {}", outcome.summary());
        render_board(&service.board());
    }

    if !args.skip_filters {
        run_filter_demo();
    }

    Ok(())
}

fn render_board(board: &Board) {
    for entry in board.stage_counts() {
        let names: Vec<&str> = board
            .column(entry.stage)
            .iter()
            .map(|app| app.candidate_id.0.as_str())
            .collect();
        println!(
            "- {:<10} {:>2} | {}",
            entry.stage.display_name(),
            entry.count,
            if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            }
        );
    }
    println!("  total: {}", board.total());
}

fn run_filter_demo() {
    let cards = demo_candidates();
    println!("\nCandidate database: {} cards", cards.len());

    let query = "rust";
    let matched = filter_by_text(&cards, query);
    println!("- text filter '{query}': {} match(es)", matched.len());
    for card in &matched {
        println!("  - {} <{}>", card.name, card.email);
    }

    let tags = vec!["senior".to_string(), "remote".to_string()];
    let tagged = filter_by_tags(&cards, &tags);
    println!("- tag filter {tags:?} (all required): {} match(es)", tagged.len());
    for card in &tagged {
        println!("  - {} [{}]", card.name, card.tags.join(", "));
    }
}

fn demo_candidates() -> Vec<CandidateCard> {
    vec![
        CandidateCard {
            candidate_id: CandidateId("cand-ada".to_string()),
            name: "Ada Veen".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+31 6 1234 5678".to_string()),
            position: Some("Senior Rust Engineer".to_string()),
            company: Some("Initech".to_string()),
            tags: vec!["rust".to_string(), "senior".to_string(), "remote".to_string()],
        },
        CandidateCard {
            candidate_id: CandidateId("cand-brin".to_string()),
            name: "Brin Kova".to_string(),
            email: "brin@corp.example".to_string(),
            phone: None,
            position: Some("Backend Engineer".to_string()),
            company: Some("Globex".to_string()),
            tags: vec!["rust".to_string(), "onsite".to_string()],
        },
        CandidateCard {
            candidate_id: CandidateId("cand-cole".to_string()),
            name: "Cole Haas".to_string(),
            email: "cole@example.org".to_string(),
            phone: Some("+49 30 555 0154".to_string()),
            position: Some("Data Engineer".to_string()),
            company: Some("Umbrella Analytics".to_string()),
            tags: vec!["python".to_string(), "senior".to_string(), "remote".to_string()],
        },
    ]
}
