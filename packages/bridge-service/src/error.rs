use bridge_domain::{
	AuthError, CODE_AUTH_FORMAT, CODE_AUTH_REJECTED, CODE_BAD_REQUEST, CODE_INTERNAL,
	CODE_KNOWLEDGE_BASE_NOT_FOUND,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid Authorization header format. Expected 'Bearer <api-key>'.")]
	AuthFormat,
	#[error("Authorization failed.")]
	AuthRejected,
	#[error("Knowledge base does not exist.")]
	KnowledgeBaseNotFound,
	#[error("{message}")]
	InvalidRequest { message: String },
	#[error("{message}")]
	Upstream { message: String },
}
impl Error {
	pub fn error_code(&self) -> u16 {
		match self {
			Self::AuthFormat => CODE_AUTH_FORMAT,
			Self::AuthRejected => CODE_AUTH_REJECTED,
			Self::KnowledgeBaseNotFound => CODE_KNOWLEDGE_BASE_NOT_FOUND,
			Self::InvalidRequest { .. } => CODE_BAD_REQUEST,
			Self::Upstream { .. } => CODE_INTERNAL,
		}
	}
}

impl From<AuthError> for Error {
	fn from(err: AuthError) -> Self {
		match err {
			AuthError::Format => Self::AuthFormat,
			AuthError::Mismatch => Self::AuthRejected,
		}
	}
}

impl From<bridge_fastgpt::Error> for Error {
	fn from(err: bridge_fastgpt::Error) -> Self {
		match err {
			bridge_fastgpt::Error::Unauthorized => Self::AuthRejected,
			other => Self::Upstream { message: other.to_string() },
		}
	}
}
