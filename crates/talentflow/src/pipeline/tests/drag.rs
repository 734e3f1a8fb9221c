use super::common::*;
use crate::pipeline::{ApplicationId, DragSession, Stage, TransitionRequest};

#[test]
fn drop_on_a_new_column_resolves_a_transition_request() {
    let card = application("app-1", "cand-ada", Stage::New);
    let mut session = DragSession::new();

    session.drag_start(&card);
    session.column_enter(Stage::Screening);
    session.column_enter(Stage::Interview);

    let request = session.release();
    assert_eq!(
        request,
        Some(TransitionRequest {
            application: ApplicationId("app-1".to_string()),
            from: Stage::New,
            to: Stage::Interview,
        })
    );
    assert!(session.is_idle());
    assert_eq!(session.hovered_target(), None);
}

#[test]
fn drop_on_own_column_resolves_to_nothing() {
    let card = application("app-4", "cand-dara", Stage::Screening);
    let mut session = DragSession::new();

    session.drag_start(&card);
    session.column_enter(Stage::Screening);

    assert_eq!(session.hovered_target(), Some(Stage::Screening));
    assert_eq!(session.release(), None);
    assert!(session.is_idle());
}

#[test]
fn leave_clears_only_the_hovered_column() {
    let card = application("app-1", "cand-ada", Stage::New);
    let mut session = DragSession::new();

    session.drag_start(&card);
    session.column_enter(Stage::Offer);

    // Spurious leave from a column already departed must not clear the target.
    session.column_leave(Stage::Screening);
    assert_eq!(session.hovered_target(), Some(Stage::Offer));

    session.column_leave(Stage::Offer);
    assert_eq!(session.hovered_target(), None);
    assert_eq!(session.release(), None);
}

#[test]
fn repeated_enter_and_leave_keeps_the_session_consistent() {
    let card = application("app-2", "cand-brin", Stage::New);
    let mut session = DragSession::new();

    session.drag_start(&card);
    for stage in [Stage::Screening, Stage::Interview, Stage::Offer] {
        session.column_enter(stage);
        session.column_leave(stage);
    }
    session.column_enter(Stage::Hired);

    let request = session.release().expect("target was committed");
    assert_eq!(request.to, Stage::Hired);
    assert!(session.is_idle());
}

#[test]
fn cancellation_without_target_returns_to_idle() {
    let card = application("app-3", "cand-cole", Stage::New);
    let mut session = DragSession::new();

    session.drag_start(&card);
    assert_eq!(session.release(), None);
    assert!(session.is_idle());
}

#[test]
fn events_while_idle_are_ignored() {
    let mut session = DragSession::new();
    session.column_enter(Stage::Interview);
    session.column_leave(Stage::Interview);
    assert!(session.is_idle());
    assert_eq!(session.release(), None);
}

#[test]
fn restarting_a_drag_replaces_the_previous_session() {
    let first = application("app-1", "cand-ada", Stage::New);
    let second = application("app-4", "cand-dara", Stage::Screening);
    let mut session = DragSession::new();

    session.drag_start(&first);
    session.column_enter(Stage::Offer);
    session.drag_start(&second);

    // The stale target from the first drag must not leak into the second.
    assert_eq!(session.hovered_target(), None);
    session.column_enter(Stage::Interview);
    let request = session.release().expect("second drag resolves");
    assert_eq!(request.application.0, "app-4");
    assert_eq!(request.from, Stage::Screening);
}
