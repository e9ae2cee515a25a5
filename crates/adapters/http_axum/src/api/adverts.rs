//! JSON REST handlers for adverts.

use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use advert_app::ports::{AdvertRepository, ConfirmationPublisher};
use advert_domain::advert::AdvertDraft;
use advert_domain::error::{AdvertError, ValidationError};
use advert_domain::id::AdvertId;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful create.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAdvertResponse {
    pub id: String,
}

/// Request body for confirming an advert.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmAdvertRequest {
    pub id: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<CreateAdvertResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the confirm endpoint.
pub enum ConfirmResponse {
    Ok,
}

impl IntoResponse for ConfirmResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /api/v1/Adverts/Create`
pub async fn create<R, P>(
    State(state): State<AppState<R, P>>,
    Json(draft): Json<AdvertDraft>,
) -> Result<CreateResponse, ApiError>
where
    R: AdvertRepository + Send + Sync + 'static,
    P: ConfirmationPublisher + Send + Sync + 'static,
{
    let id = state.advert_service.create_advert(draft).await?;
    Ok(CreateResponse::Ok(Json(CreateAdvertResponse {
        id: id.to_string(),
    })))
}

/// `PUT /api/v1/Adverts/Confirm`
pub async fn confirm<R, P>(
    State(state): State<AppState<R, P>>,
    Json(req): Json<ConfirmAdvertRequest>,
) -> Result<ConfirmResponse, ApiError>
where
    R: AdvertRepository + Send + Sync + 'static,
    P: ConfirmationPublisher + Send + Sync + 'static,
{
    let id = AdvertId::from_str(&req.id)
        .map_err(|_| ApiError::from(AdvertError::from(ValidationError::MalformedId)))?;
    state.advert_service.confirm_advert(id).await?;
    Ok(ConfirmResponse::Ok)
}
