use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::board::StageTab;
use super::domain::{ApplicationId, VacancyId};
use super::gateway::{GatewayError, Notifier, PipelineGateway};
use super::stage::Stage;
use super::store::{BoardService, MoveOutcome, StoreError};

/// Router builder exposing HTTP endpoints for the pipeline board.
pub fn board_router<G, N>(service: Arc<BoardService<G, N>>) -> Router
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/vacancies/:vacancy_id/board",
            get(fetch_board_handler::<G, N>),
        )
        .route(
            "/api/v1/vacancies/:vacancy_id/board/list",
            get(list_handler::<G, N>),
        )
        .route(
            "/api/v1/applications/:application_id/stage",
            post(move_handler::<G, N>),
        )
        .route(
            "/api/v1/applications/:application_id",
            delete(remove_handler::<G, N>),
        )
        .route(
            "/api/v1/applications/:application_id/transition",
            get(transition_phase_handler::<G, N>),
        )
        .route(
            "/api/v1/applications/stage/bulk",
            post(bulk_move_handler::<G, N>),
        )
        .route(
            "/api/v1/applications/remove/bulk",
            post(bulk_remove_handler::<G, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoveRequest {
    pub(crate) stage: Stage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkMoveRequest {
    pub(crate) applications: Vec<ApplicationId>,
    pub(crate) stage: Stage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkRemoveRequest {
    pub(crate) applications: Vec<ApplicationId>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) tab: Option<String>,
}

pub(crate) async fn fetch_board_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    Path(vacancy_id): Path<String>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let vacancy = VacancyId(vacancy_id);
    match service.fetch_board(&vacancy).await {
        Ok(board) => (StatusCode::OK, axum::Json(board.view(&vacancy))).into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn list_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    Path(vacancy_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let vacancy = VacancyId(vacancy_id);
    if service.vacancy().as_ref() != Some(&vacancy) {
        let payload = json!({ "error": "board not loaded for this vacancy" });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }

    let raw_tab = query.tab.unwrap_or_else(|| "all".to_string());
    let Some(tab) = StageTab::parse(&raw_tab) else {
        let payload = json!({ "error": format!("unknown stage tab '{raw_tab}'") });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let board = service.board();
    let applications: Vec<_> = board
        .filter_by_stage_tab(tab)
        .into_iter()
        .cloned()
        .collect();
    let payload = json!({
        "vacancy_id": vacancy.0,
        "tab": raw_tab.trim().to_ascii_lowercase(),
        "count": applications.len(),
        "applications": applications,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn move_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<MoveRequest>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.move_application(&id, request.stage).await {
        Ok(MoveOutcome::Moved { stage, changed_at }) => {
            let payload = json!({
                "application_id": id.0,
                "stage": stage,
                "changed_at": changed_at,
                "changed": true,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(MoveOutcome::AlreadyInStage) => {
            let payload = json!({
                "application_id": id.0,
                "stage": request.stage,
                "changed": false,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn remove_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.remove_application(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

pub(crate) async fn transition_phase_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let id = ApplicationId(application_id);
    match service.transition_phase(&id) {
        Some(phase) => {
            let payload = json!({ "application_id": id.0, "phase": phase.label() });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "error": "no transition recorded" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn bulk_move_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    axum::Json(request): axum::Json<BulkMoveRequest>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let outcome = service.bulk_move(&request.applications, request.stage).await;
    let status = if outcome.is_clean() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    (status, axum::Json(outcome)).into_response()
}

pub(crate) async fn bulk_remove_handler<G, N>(
    State(service): State<Arc<BoardService<G, N>>>,
    axum::Json(request): axum::Json<BulkRemoveRequest>,
) -> Response
where
    G: PipelineGateway + 'static,
    N: Notifier + 'static,
{
    let outcome = service.bulk_remove(&request.applications).await;
    let status = if outcome.is_clean() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    (status, axum::Json(outcome)).into_response()
}

fn store_error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::UnknownApplication(_) => StatusCode::NOT_FOUND,
        StoreError::Transition { source } | StoreError::Removal { source } => match source {
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::Stale => StatusCode::CONFLICT,
            GatewayError::PermissionDenied => StatusCode::FORBIDDEN,
            GatewayError::Transport(_) => StatusCode::BAD_GATEWAY,
        },
        StoreError::Fetch {
            source: GatewayError::NotFound,
        } => StatusCode::NOT_FOUND,
        StoreError::Fetch { .. } | StoreError::InconsistentSnapshot { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
