use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub security: Security,
	pub upstream: Upstream,
	#[serde(default)]
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Security {
	/// Optional. When set, the bearer token of every request must equal it.
	pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Upstream {
	/// FastGPT base URL; a trailing slash is stripped on load.
	pub base_url: String,
	#[serde(default = "default_connect_timeout_ms")]
	pub connect_timeout_ms: u64,
	#[serde(default = "default_read_timeout_ms")]
	pub read_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default)]
	pub using_extension: bool,
	#[serde(default = "default_extension_model")]
	pub extension_model: String,
	#[serde(default)]
	pub extension_bg: String,
	#[serde(default)]
	pub using_rerank: bool,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			using_extension: false,
			extension_model: default_extension_model(),
			extension_bg: String::new(),
			using_rerank: false,
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_connect_timeout_ms() -> u64 {
	5_000
}

fn default_read_timeout_ms() -> u64 {
	30_000
}

fn default_extension_model() -> String {
	"gpt-4-mini".to_string()
}
