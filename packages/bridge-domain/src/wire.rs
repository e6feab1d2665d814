use serde::{Deserialize, Serialize};

/// Dify's external-knowledge retrieval request.
///
/// The two required fields are deserialized as optional so that their absence can
/// be reported with distinct error codes instead of a generic decode failure.
#[derive(Debug, Deserialize)]
pub struct RetrievalRequest {
	#[serde(default)]
	pub knowledge_id: Option<String>,
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub retrieval_setting: RetrievalSetting,
}

#[derive(Debug, Deserialize)]
pub struct RetrievalSetting {
	#[serde(default = "default_top_k")]
	pub top_k: u32,
	#[serde(default = "default_score_threshold")]
	pub score_threshold: f64,
}
impl Default for RetrievalSetting {
	fn default() -> Self {
		Self { top_k: default_top_k(), score_threshold: default_score_threshold() }
	}
}

#[derive(Debug, Serialize)]
pub struct RetrievalResponse {
	pub records: Vec<Record>,
}

/// One retrieval result in the shape Dify expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
	pub content: String,
	pub score: f64,
	pub title: String,
	pub metadata: RecordMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordMetadata {
	pub path: String,
	pub source_id: String,
	pub chunk_index: i64,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
	pub message: String,
}

/// Uniform failure shape for every error path of the endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
	pub error_code: u16,
	pub error_msg: String,
}

fn default_top_k() -> u32 {
	5
}

fn default_score_threshold() -> f64 {
	0.5
}
