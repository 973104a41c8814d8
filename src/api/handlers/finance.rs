use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateTransactionRequest, LedgerQuery};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::transaction::NewTransactionParams;
use std::sync::Arc;
use serde_json::json;

pub async fn get_ledger(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(query): Query<LedgerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ledger = state.ledger_service.ledger(&user, &query.club_id).await?;
    Ok(Json(ledger))
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = state.ledger_service.record(&user, NewTransactionParams {
        club_id: payload.club_id,
        kind: payload.kind,
        amount: payload.amount,
        category: payload.category,
        description: payload.description,
        receipt_url: payload.receipt_url,
        created_by: user.id.clone(),
    }).await?;

    Ok(Json(json!({
        "message": "Transaction added",
        "transaction": transaction
    })))
}
