pub mod auth;
pub mod wire;

pub use auth::{AuthError, authenticate};
pub use wire::{
	ErrorBody, ProbeResponse, Record, RecordMetadata, RetrievalRequest, RetrievalResponse,
	RetrievalSetting,
};

/// Malformed `Authorization` header.
pub const CODE_AUTH_FORMAT: u16 = 1_001;
/// Credential rejected, locally or by the upstream.
pub const CODE_AUTH_REJECTED: u16 = 1_002;
/// Missing or empty knowledge base identifier.
pub const CODE_KNOWLEDGE_BASE_NOT_FOUND: u16 = 2_001;
/// Malformed JSON, missing query, or unsupported content type.
pub const CODE_BAD_REQUEST: u16 = 400;
/// Upstream unreachable or any other internal failure.
pub const CODE_INTERNAL: u16 = 500;
