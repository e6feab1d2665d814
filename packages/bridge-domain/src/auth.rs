const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
	#[error("Invalid Authorization header format. Expected 'Bearer <api-key>'.")]
	Format,
	#[error("Authorization failed.")]
	Mismatch,
}

/// Checks the `Authorization` header against the optional configured API key and
/// yields the raw bearer token for upstream pass-through.
///
/// Pure function of its inputs; the token is never transformed, only forwarded.
pub fn authenticate<'a>(
	header: Option<&'a str>,
	expected: Option<&str>,
) -> Result<&'a str, AuthError> {
	let token =
		header.and_then(|value| value.strip_prefix(BEARER_PREFIX)).ok_or(AuthError::Format)?;

	if let Some(expected) = expected
		&& token != expected
	{
		return Err(AuthError::Mismatch);
	}

	Ok(token)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_bearer_token_without_configured_key() {
		assert_eq!(authenticate(Some("Bearer abc"), None), Ok("abc"));
	}

	#[test]
	fn accepts_matching_token() {
		assert_eq!(authenticate(Some("Bearer abc"), Some("abc")), Ok("abc"));
	}

	#[test]
	fn rejects_missing_header() {
		assert_eq!(authenticate(None, None), Err(AuthError::Format));
	}

	#[test]
	fn rejects_non_bearer_scheme() {
		assert_eq!(authenticate(Some("Basic abc"), None), Err(AuthError::Format));
		assert_eq!(authenticate(Some("bearer abc"), None), Err(AuthError::Format));
	}

	#[test]
	fn passes_empty_token_through_when_no_key_is_configured() {
		// Matches the upstream contract: the token is forwarded as-is and the
		// upstream decides whether it is valid.
		assert_eq!(authenticate(Some("Bearer "), None), Ok(""));
	}

	#[test]
	fn rejects_mismatched_token() {
		assert_eq!(authenticate(Some("Bearer abc"), Some("xyz")), Err(AuthError::Mismatch));
	}
}
