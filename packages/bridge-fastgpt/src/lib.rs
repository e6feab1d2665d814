mod error;
pub mod retry;
pub mod translate;

pub use error::{Error, Result};
pub use retry::RetryPolicy;

use std::time::Duration;

use reqwest::{StatusCode, header::CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

/// FastGPT's own status code for a rejected API key, carried inside error bodies.
const INVALID_CREDENTIAL_CODE: i64 = 514;
const DATASET_LIST_PATH: &str = "/api/core/dataset/list";
const DATASET_SEARCH_PATH: &str = "/api/core/dataset/searchTest";

/// Transport failures on the search call are retried; HTTP-level errors are not.
const SEARCH_RETRY: RetryPolicy = RetryPolicy::new(3, Duration::from_secs(1));

/// Body of FastGPT's dataset search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	pub dataset_id: String,
	pub text: String,
	pub limit: u64,
	pub similarity: f64,
	pub search_mode: String,
	pub using_re_rank: bool,
	pub dataset_search_using_extension_query: bool,
	pub dataset_search_extension_model: String,
	pub dataset_search_extension_bg: String,
}

pub struct Client {
	http: reqwest::Client,
	base_url: String,
}
impl Client {
	pub fn new(cfg: &bridge_config::Upstream) -> Result<Self> {
		let http = reqwest::Client::builder()
			.connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
			.timeout(Duration::from_millis(cfg.read_timeout_ms))
			.build()?;

		Ok(Self { http, base_url: cfg.base_url.clone() })
	}

	/// Connectivity probe. Lists datasets with the forwarded bearer token; only
	/// an HTTP 200 whose body carries FastGPT's `code == 200` counts as success.
	pub async fn list_datasets(&self, bearer: &str) -> Result<()> {
		let url = format!("{}{DATASET_LIST_PATH}", self.base_url);
		let res = self
			.http
			.get(url)
			.bearer_auth(bearer)
			.header(CONTENT_TYPE, "application/json")
			.send()
			.await?;
		let status = res.status();

		if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
			return Err(Error::Unauthorized);
		}

		let body = res.text().await?;

		if status != StatusCode::OK {
			return Err(Error::Upstream { status: status.as_u16(), body });
		}

		let json: Value = serde_json::from_str(&body).map_err(|err| Error::InvalidResponse {
			message: format!("Failed to parse FastGPT dataset list response: {err}."),
		})?;

		if json.get("code").and_then(Value::as_i64) != Some(200) {
			return Err(Error::Unauthorized);
		}

		Ok(())
	}

	/// Dataset search. Retries transport failures per [`SEARCH_RETRY`]; a non-200
	/// response is terminal and inspected for FastGPT's invalid-credential code.
	pub async fn search(&self, bearer: &str, request: &SearchRequest) -> Result<Value> {
		let url = format!("{}{DATASET_SEARCH_PATH}", self.base_url);
		let res = SEARCH_RETRY
			.run(
				|err: &reqwest::Error| is_transport(err),
				|_| self.http.post(url.as_str()).bearer_auth(bearer).json(request).send(),
			)
			.await?;
		let status = res.status();

		if status != StatusCode::OK {
			let body = res.text().await?;

			if let Ok(json) = serde_json::from_str::<Value>(&body)
				&& json.get("code").and_then(Value::as_i64) == Some(INVALID_CREDENTIAL_CODE)
			{
				return Err(Error::Unauthorized);
			}

			return Err(Error::Upstream { status: status.as_u16(), body });
		}

		Ok(res.json().await?)
	}
}

fn is_transport(err: &reqwest::Error) -> bool {
	err.is_connect() || err.is_timeout() || err.is_request()
}
