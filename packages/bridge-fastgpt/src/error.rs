pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("FastGPT API connection failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("Authorization failed.")]
	Unauthorized,
	#[error("FastGPT API error: status={status}, body={body}")]
	Upstream { status: u16, body: String },
	#[error("{message}")]
	InvalidResponse { message: String },
}
