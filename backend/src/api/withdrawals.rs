//! Withdrawal API handlers
//!
//! `POST /withdrawals` validates and records a payout request. The write lock
//! is held from author lookup through append, so concurrent requests cannot
//! both pass the balance check against the same balance.

use crate::api::utils::{parse_amount, parse_author_id};
use crate::error::AppError;
use crate::state::{AppState, Withdrawal, WithdrawalError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use chrono::{SubsecRound, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Create withdrawal request
///
/// Fields are kept as raw JSON so loosely typed clients get validation
/// errors instead of deserialization failures.
#[derive(Debug, Default)]
pub struct CreateWithdrawalRequest {
    /// Author to pay out
    pub author_id: Option<Value>,
    /// Amount in whole rupees
    pub amount: Option<Value>,
}

impl CreateWithdrawalRequest {
    /// Read `author_id` and `amount` from a JSON body
    ///
    /// Only object bodies carry fields; arrays and scalars yield an empty
    /// request, which resolves to an unknown author.
    pub fn from_body(body: &Value) -> Self {
        match body.as_object() {
            Some(fields) => Self {
                author_id: fields.get("author_id").cloned(),
                amount: fields.get("amount").cloned(),
            },
            None => Self::default(),
        }
    }
}

/// Created withdrawal plus the author's balance after it
#[derive(Debug, Serialize)]
pub struct WithdrawalReceipt {
    /// The recorded withdrawal
    #[serde(flatten)]
    pub withdrawal: Withdrawal,
    /// Balance after this withdrawal
    pub new_balance: i64,
}

/// POST /withdrawals - Request a payout
pub async fn create_withdrawal(
    State(state): State<Arc<RwLock<AppState>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<WithdrawalReceipt>), AppError> {
    let Json(body) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let request = CreateWithdrawalRequest::from_body(&body);

    let mut state = state.write().await;
    let result = validate_and_record(&mut state, &request);
    let withdrawal = match result {
        Ok(withdrawal) => withdrawal,
        Err(e) => {
            debug!(
                author_id = ?request.author_id,
                amount = ?request.amount,
                reason = %e,
                "Withdrawal rejected"
            );
            return Err(e.into());
        }
    };
    let new_balance = state.current_balance(withdrawal.author_id);

    info!(
        withdrawal_id = withdrawal.id,
        author_id = withdrawal.author_id,
        amount = withdrawal.amount,
        new_balance,
        "Withdrawal recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(WithdrawalReceipt {
            withdrawal,
            new_balance,
        }),
    ))
}

fn validate_and_record(
    state: &mut AppState,
    request: &CreateWithdrawalRequest,
) -> Result<Withdrawal, WithdrawalError> {
    let author_id = parse_author_id(request.author_id.as_ref())
        .filter(|id| state.author(*id).is_some())
        .ok_or(WithdrawalError::AuthorNotFound)?;
    let amount = parse_amount(request.amount.as_ref())
        .ok_or(WithdrawalError::BelowMinimum(state.minimum_withdrawal()))?;

    // Millisecond precision, matching the serialized form
    let created_at = Utc::now().trunc_subsecs(3);
    state.record_withdrawal(author_id, amount, created_at)
}
