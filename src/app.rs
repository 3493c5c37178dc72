use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/ledger", get(handlers::get_ledger))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/metrics/water", post(handlers::set_water))
        .route("/api/metrics/steps", post(handlers::set_steps))
        .route("/api/day/complete", post(handlers::complete_day))
        .route("/api/day/reset", post(handlers::reset_today))
        .route("/api/challenge/reset", post(handlers::reset_challenge))
        .with_state(state)
}
