use crate::auth::UserId;
use crate::errors::AppError;
use crate::ledger;
use crate::models::{
    CompleteDayResponse, LedgerResponse, MetricRequest, StatsResponse, ToggleRequest, UserLedger,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::{info, warn};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_ledger(
    State(state): State<AppState>,
    user: UserId,
) -> Result<Json<LedgerResponse>, AppError> {
    let ledger = state.store.load(&user.0).await;
    Ok(Json(to_ledger_response(&ledger)))
}

pub async fn get_stats(
    State(state): State<AppState>,
    user: UserId,
) -> Result<Json<StatsResponse>, AppError> {
    let ledger = state.store.load(&user.0).await;
    Ok(Json(build_stats(&ledger)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    user: UserId,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let (_, updated) = state
        .store
        .update(&user.0, |ledger| ledger::toggle_task(ledger, &payload.key))
        .await?;
    flush_now(&state, &user).await;
    Ok(Json(to_ledger_response(&updated)))
}

pub async fn set_water(
    State(state): State<AppState>,
    user: UserId,
    Json(payload): Json<MetricRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let (_, updated) = state
        .store
        .update(&user.0, |ledger| {
            ledger::set_water(ledger, &payload.value);
            Ok(())
        })
        .await?;
    state.flusher.schedule(&user.0, state.store.clone()).await;
    Ok(Json(to_ledger_response(&updated)))
}

pub async fn set_steps(
    State(state): State<AppState>,
    user: UserId,
    Json(payload): Json<MetricRequest>,
) -> Result<Json<LedgerResponse>, AppError> {
    let (_, updated) = state
        .store
        .update(&user.0, |ledger| {
            ledger::set_steps(ledger, &payload.value);
            Ok(())
        })
        .await?;
    state.flusher.schedule(&user.0, state.store.clone()).await;
    Ok(Json(to_ledger_response(&updated)))
}

pub async fn complete_day(
    State(state): State<AppState>,
    user: UserId,
) -> Result<Json<CompleteDayResponse>, AppError> {
    let (outcome, updated) = state
        .store
        .update(&user.0, ledger::complete_day)
        .await?;
    info!(
        "user {} completed day {}{}",
        user.0,
        outcome.day,
        if outcome.finished { " (challenge finished)" } else { "" }
    );
    flush_now(&state, &user).await;
    Ok(Json(CompleteDayResponse {
        completed_day: outcome.day,
        finished: outcome.finished,
        current_day: updated.current_day,
    }))
}

pub async fn reset_today(
    State(state): State<AppState>,
    user: UserId,
) -> Result<Json<LedgerResponse>, AppError> {
    let (_, updated) = state
        .store
        .update(&user.0, |ledger| {
            ledger::reset_today(ledger);
            Ok(())
        })
        .await?;
    flush_now(&state, &user).await;
    Ok(Json(to_ledger_response(&updated)))
}

pub async fn reset_challenge(
    State(state): State<AppState>,
    user: UserId,
) -> Result<Json<LedgerResponse>, AppError> {
    let (_, updated) = state
        .store
        .update(&user.0, |ledger| {
            ledger::reset_challenge(ledger);
            Ok(())
        })
        .await?;
    info!("user {} reset the challenge", user.0);
    flush_now(&state, &user).await;
    Ok(Json(to_ledger_response(&updated)))
}

/// Immediate persistence for non-metric mutations. The in-memory update is
/// authoritative; a failed write is logged, not surfaced as a failure.
async fn flush_now(state: &AppState, user: &UserId) {
    if let Err(err) = state.store.flush().await {
        warn!("persisting ledger for {} failed: {}", user.0, err.message);
    }
}

fn to_ledger_response(ledger: &UserLedger) -> LedgerResponse {
    LedgerResponse {
        current_day: ledger.current_day,
        completed_count: ledger.completed_days.len(),
        completion_percentage: ledger::completion_percentage(ledger),
        day_complete: ledger::is_day_complete(ledger),
        today: ledger.today.clone(),
    }
}
