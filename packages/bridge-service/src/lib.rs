mod error;

pub use error::{Error, Result};

use serde_json::Value;

use bridge_config::Config;
use bridge_domain::{ProbeResponse, RetrievalRequest, RetrievalResponse, RetrievalSetting};
use bridge_fastgpt::{Client, SearchRequest, translate};

/// FastGPT is asked for far more candidates than `top_k` so that its own
/// filtering and reranking have enough to work with.
const SEARCH_LIMIT_MULTIPLIER: u64 = 500;
const EMBEDDING_SEARCH_MODE: &str = "embedding";
const PROBE_SUCCESS_MESSAGE: &str = "API credential verified.";

/// Stateless request translator; holds only the startup config and the upstream
/// client, shared read-only across requests.
pub struct Bridge {
	config: Config,
	client: Client,
}
impl Bridge {
	pub fn new(config: Config) -> Result<Self> {
		let client = Client::new(&config.upstream)?;

		Ok(Self { config, client })
	}

	/// The locally configured API key, when one is set.
	pub fn api_key(&self) -> Option<&str> {
		self.config.security.api_key.as_deref()
	}

	/// Connectivity probe: verifies the forwarded credential against FastGPT's
	/// dataset listing without performing a search.
	pub async fn probe(&self, bearer: &str) -> Result<ProbeResponse> {
		self.client.list_datasets(bearer).await?;

		tracing::info!("FastGPT credential verified.");

		Ok(ProbeResponse { message: PROBE_SUCCESS_MESSAGE.to_string() })
	}

	/// Full retrieval: validate, search FastGPT, translate the result list.
	pub async fn retrieve(
		&self,
		bearer: &str,
		request: RetrievalRequest,
	) -> Result<RetrievalResponse> {
		// Empty strings count as absent, and the two fields fail with different
		// codes; callers probe knowledge base existence via the 2001 code.
		let knowledge_id = request
			.knowledge_id
			.as_deref()
			.filter(|id| !id.is_empty())
			.ok_or(Error::KnowledgeBaseNotFound)?;
		let query = request.query.as_deref().filter(|q| !q.is_empty()).ok_or_else(|| {
			Error::InvalidRequest { message: "Query must be non-empty.".to_string() }
		})?;
		let search_request =
			self.search_request(knowledge_id, query, &request.retrieval_setting);

		tracing::debug!(
			dataset_id = knowledge_id,
			limit = search_request.limit,
			"Calling FastGPT dataset search."
		);

		let response = self.client.search(bearer, &search_request).await?;
		let list = response
			.get("data")
			.and_then(|data| data.get("list"))
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or_default();
		let records = translate::translate_records(list);

		tracing::info!(results = list.len(), records = records.len(), "Search translated.");

		Ok(RetrievalResponse { records })
	}

	fn search_request(
		&self,
		knowledge_id: &str,
		query: &str,
		setting: &RetrievalSetting,
	) -> SearchRequest {
		let search = &self.config.search;

		SearchRequest {
			dataset_id: knowledge_id.to_string(),
			text: query.to_string(),
			limit: u64::from(setting.top_k) * SEARCH_LIMIT_MULTIPLIER,
			similarity: setting.score_threshold,
			search_mode: EMBEDDING_SEARCH_MODE.to_string(),
			using_re_rank: search.using_rerank,
			dataset_search_using_extension_query: search.using_extension,
			dataset_search_extension_model: search.extension_model.clone(),
			dataset_search_extension_bg: search.extension_bg.clone(),
		}
	}
}
