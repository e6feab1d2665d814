use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use bridge_domain::{ErrorBody, RetrievalRequest, authenticate};
use bridge_service::Error as ServiceError;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/retrieval", post(retrieval))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

/// Authenticate, then dispatch on Content-Type: absent means connectivity
/// probe, `application/json` means real retrieval, anything else is rejected.
///
/// The body arrives as raw bytes rather than through the `Json` extractor so
/// that probe requests (which carry no Content-Type) reach the handler at all,
/// and so that parse failures render the endpoint's error shape.
async fn retrieval(
	State(state): State<AppState>,
	headers: HeaderMap,
	body: Bytes,
) -> Result<Response, ApiError> {
	let auth_header = headers.get(header::AUTHORIZATION).and_then(|value| value.to_str().ok());
	let bearer =
		authenticate(auth_header, state.service.api_key()).map_err(ServiceError::from)?;
	let content_type =
		headers.get(header::CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or("");

	if content_type.is_empty() {
		tracing::info!("Received connectivity probe.");

		let response = state.service.probe(bearer).await?;

		return Ok(Json(response).into_response());
	}
	if !content_type.starts_with("application/json") {
		return Err(ServiceError::InvalidRequest {
			message: format!(
				"Unsupported Content-Type: {content_type}; application/json is required."
			),
		}
		.into());
	}

	let request: RetrievalRequest =
		serde_json::from_slice(&body).map_err(|err| ServiceError::InvalidRequest {
			message: format!("Failed to parse JSON body: {err}."),
		})?;
	let response = state.service.retrieve(bearer, request).await?;

	Ok(Json(response).into_response())
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	body: ErrorBody,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let status = match &err {
			ServiceError::AuthFormat | ServiceError::AuthRejected => StatusCode::FORBIDDEN,
			ServiceError::KnowledgeBaseNotFound | ServiceError::InvalidRequest { .. } =>
				StatusCode::BAD_REQUEST,
			ServiceError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		Self {
			status,
			body: ErrorBody { error_code: err.error_code(), error_msg: err.to_string() },
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		tracing::error!(
			error_code = self.body.error_code,
			error_msg = %self.body.error_msg,
			"Request failed."
		);

		(self.status, Json(self.body)).into_response()
	}
}
