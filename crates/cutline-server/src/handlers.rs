//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use cutline_core::{
    money::{self, cents_to_dollars, DEFAULT_CURRENCY},
    Catalog, ConfirmRequest, ConfirmResponse, CreateIntentRequest, CreateIntentResponse,
    PaymentSummary,
};
use cutline_payments::{NewIntent, PaymentGateway};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,

    /// Intent status, when a confirmation is refused because of it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: &str, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
            status: None,
        }),
    )
}

fn require_gateway(state: &AppState) -> Result<Arc<dyn PaymentGateway>, ApiError> {
    state.gateway.clone().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })
}

/// Unreadable or missing bodies are handled as `{}`, so each endpoint answers
/// with its own 400 instead of axum's plain-text rejection.
fn body_or_empty<T: Default>(payload: Result<Json<T>, JsonRejection>, endpoint: &str) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(endpoint, error = %rejection, "Unreadable JSON body");
            T::default()
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.gateway.is_some(),
    })
}

/// Service pricing
pub async fn pricing(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// Create a payment intent
pub async fn create_intent(
    State(state): State<AppState>,
    payload: Result<Json<CreateIntentRequest>, JsonRejection>,
) -> Result<Json<CreateIntentResponse>, ApiError> {
    let payload = body_or_empty(payload, "create-intent");
    let amount = money::ensure_chargeable(payload.amount.unwrap_or_default()).map_err(|e| {
        api_error(StatusCode::BAD_REQUEST, e.user_message(), "INVALID_AMOUNT")
    })?;

    let gateway = require_gateway(&state)?;
    let currency = payload
        .currency
        .clone()
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let request = NewIntent::new(amount)
        .currency(currency.clone())
        .service(payload.service.clone())
        .customer_email(payload.customer_email);

    let intent = gateway.create_intent(request).await.map_err(|e| {
        tracing::error!(
            gateway = gateway.name(),
            retryable = e.is_retryable(),
            error = %e,
            "Payment intent creation error"
        );
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create payment intent",
            "INTENT_ERROR",
        )
    })?;

    tracing::info!(intent_id = %intent.id, amount, currency = %currency, "Payment intent created");

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
        amount,
        currency,
        service: payload.service,
    }))
}

/// Confirm a payment and run the crypto payout
pub async fn confirm_payment(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmRequest>, JsonRejection>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    let payload = body_or_empty(payload, "confirm");
    let intent_id = payload.intent_id().ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            "Payment intent ID required",
            "MISSING_INTENT_ID",
        )
    })?;

    let gateway = require_gateway(&state)?;

    let intent = gateway.retrieve_intent(intent_id).await.map_err(|e| {
        tracing::error!(
            gateway = gateway.name(),
            intent_id,
            retryable = e.is_retryable(),
            error = %e,
            "Payment confirmation error"
        );
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to confirm payment",
            "CONFIRM_ERROR",
        )
    })?;

    if !intent.status.is_succeeded() {
        tracing::warn!(intent_id, status = %intent.status, "Payment not successful");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Payment not successful".into(),
                code: "PAYMENT_NOT_SUCCEEDED".into(),
                status: Some(intent.status.to_string()),
            }),
        ));
    }

    let amount = cents_to_dollars(intent.amount);
    let crypto_payout = state.payout.process(amount, &intent.currency).await;

    Ok(Json(ConfirmResponse {
        success: true,
        payment: PaymentSummary {
            service: intent.service().map(str::to_string),
            id: intent.id,
            amount,
            currency: intent.currency,
            status: intent.status.to_string(),
        },
        crypto_payout,
    }))
}
