//! Account lifecycle requests: deactivate, reactivate, transfer.
//!
//! Deactivation arrives as multipart (`reason`, optional `attachment`),
//! the other actions as JSON `{reason}`.

use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::routing::post;
use axum::{Json, Router};
use contracts::shared::DataEnvelope;
use contracts::system::account::{validate_reason, AccountAction, AccountActionRequest, AccountActionResponse, AccountRole};

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::extract::ApiJson;
use crate::shared::state::AppState;

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}

/// Reason and attachment file name out of a multipart body
async fn read_multipart(mut multipart: Multipart) -> ApiResult<(String, Option<String>)> {
    let mut reason = String::new();
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "reason" => {
                reason = field.text().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
            }
            "attachment" => {
                let file_name = field.file_name().unwrap_or("attachment").to_string();
                let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
                if !bytes.is_empty() {
                    tracing::info!("received attachment {} ({} bytes)", file_name, bytes.len());
                    attachment = Some(file_name);
                }
            }
            other => tracing::debug!("ignoring multipart field {}", other),
        }
    }

    Ok((reason, attachment))
}

fn confirmation(role: AccountRole, action: AccountAction) -> String {
    match action {
        AccountAction::Deactivate => "Your account has been deactivated.".to_string(),
        AccountAction::Reactivate => "Your account has been reactivated.".to_string(),
        AccountAction::Transfer => format!("Your account has been transferred to a {} account.", role.transfer_target().as_path()),
    }
}

/// POST /api/account/:role/:action
pub async fn submit(
    State(state): State<AppState>,
    Path((role, action)): Path<(String, String)>,
    request: Request,
) -> ApiResult<Json<DataEnvelope<AccountActionResponse>>> {
    let role = AccountRole::parse(&role).ok_or_else(|| ApiError::BadRequest(format!("unknown account role '{}'", role)))?;
    let action =
        AccountAction::parse(&action).ok_or_else(|| ApiError::BadRequest(format!("unknown account action '{}'", action)))?;

    let (reason, attachment) = if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        read_multipart(multipart).await?
    } else {
        let ApiJson(body) = ApiJson::<AccountActionRequest>::from_request(request, &state).await?;
        (body.reason, None)
    };

    validate_reason(&reason).map_err(|message| ApiError::field("reason", message))?;
    if attachment.is_some() && !action.accepts_attachment() {
        return Err(ApiError::field("attachment", "Attachments are only accepted when deactivating."));
    }

    tracing::info!("{} {}: {}", role.as_path(), action.as_path(), reason.trim());
    Ok(Json(DataEnvelope::new(AccountActionResponse {
        message: confirmation(role, action),
        role,
        action,
        attachment,
    })))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/:role/:action", post(submit))
}
