use serde_json::Value;

use bridge_domain::{Record, RecordMetadata};

const PATH_SCHEME: &str = "fastgpt://";
const EMBEDDING_SCORE_TYPE: &str = "embedding";
const UNKNOWN_TITLE: &str = "Unknown";

/// Maps FastGPT's `data.list` entries onto Dify records.
///
/// Entries that are not JSON objects are skipped; a lossy list never fails the
/// translation as a whole.
pub fn translate_records(list: &[Value]) -> Vec<Record> {
	let mut records = Vec::with_capacity(list.len());

	for item in list {
		let Some(obj) = item.as_object() else {
			tracing::warn!(item = %item, "Skipping non-object search result entry.");

			continue;
		};
		let str_field =
			|key: &str| obj.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
		let q = str_field("q");
		let a = str_field("a");
		let content = if !q.is_empty() && !a.is_empty() {
			format!("{q}\n{a}")
		} else if !q.is_empty() {
			q
		} else {
			a
		};
		let title = obj
			.get("sourceName")
			.and_then(Value::as_str)
			.unwrap_or(UNKNOWN_TITLE)
			.to_string();

		records.push(Record {
			content,
			score: embedding_score(obj.get("score")),
			title,
			metadata: RecordMetadata {
				path: format!("{PATH_SCHEME}{}", str_field("collectionId")),
				source_id: str_field("sourceId"),
				chunk_index: obj.get("chunkIndex").and_then(Value::as_i64).unwrap_or(0),
			},
		});
	}

	records
}

/// First `embedding`-typed entry of the score list, 0 when the list is absent,
/// malformed, or carries no such entry.
fn embedding_score(scores: Option<&Value>) -> f64 {
	let Some(scores) = scores.and_then(Value::as_array) else {
		return 0.0;
	};

	scores
		.iter()
		.find(|entry| {
			entry.get("type").and_then(Value::as_str) == Some(EMBEDDING_SCORE_TYPE)
		})
		.and_then(|entry| entry.get("value"))
		.and_then(Value::as_f64)
		.unwrap_or(0.0)
}
