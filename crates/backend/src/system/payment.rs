//! Payment accounts of the signed-in business.
//!
//! Stripe and manual bank details live on separate endpoints; an account
//! that is not set up answers 404, which the portal reads as "not configured".

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use contracts::shared::DataEnvelope;
use contracts::system::payment::{ManualAccount, StripeAccount};

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct PaymentSettings {
    pub stripe: Option<StripeAccount>,
    pub manual: Option<ManualAccount>,
}

impl PaymentSettings {
    /// Development default: bank transfer only, no Stripe account
    pub fn sample() -> Self {
        Self {
            stripe: None,
            manual: Some(ManualAccount {
                account_holder: "Insight Consulting LLC".into(),
                bank_name: "Saudi National Bank".into(),
                iban: "SA03 8000 0000 6080 1016 7519".into(),
                swift: Some("NCBKSAJE".into()),
            }),
        }
    }
}

/// GET /api/payment/stripe/account
pub async fn stripe_account(State(state): State<AppState>) -> ApiResult<Json<DataEnvelope<StripeAccount>>> {
    state
        .payment
        .stripe
        .clone()
        .map(|account| Json(DataEnvelope::new(account)))
        .ok_or_else(|| ApiError::NotFound("Stripe account".into()))
}

/// GET /api/payment/manual/account
pub async fn manual_account(State(state): State<AppState>) -> ApiResult<Json<DataEnvelope<ManualAccount>>> {
    state
        .payment
        .manual
        .clone()
        .map(|account| Json(DataEnvelope::new(account)))
        .ok_or_else(|| ApiError::NotFound("Manual account".into()))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stripe/account", get(stripe_account))
        .route("/manual/account", get(manual_account))
}
