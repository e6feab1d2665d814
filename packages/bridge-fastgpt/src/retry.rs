use std::{future::Future, time::Duration};

use tokio::time;

/// Fixed-count, fixed-delay retry with a caller-supplied predicate deciding which
/// errors are worth another attempt.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
	pub max_attempts: u32,
	pub delay: Duration,
}
impl RetryPolicy {
	pub const fn new(max_attempts: u32, delay: Duration) -> Self {
		Self { max_attempts, delay }
	}

	/// Runs `op` up to `max_attempts` times, sleeping `delay` between attempts.
	///
	/// An error for which `should_retry` returns `false` is terminal, as is the
	/// error of the final attempt.
	pub async fn run<T, E, P, F, Fut>(&self, mut should_retry: P, mut op: F) -> Result<T, E>
	where
		E: std::fmt::Display,
		P: FnMut(&E) -> bool,
		F: FnMut(u32) -> Fut,
		Fut: Future<Output = Result<T, E>>,
	{
		let mut attempt = 1;

		loop {
			match op(attempt).await {
				Ok(value) => return Ok(value),
				Err(err) if attempt < self.max_attempts && should_retry(&err) => {
					tracing::warn!(attempt, error = %err, "Request failed; retrying.");

					time::sleep(self.delay).await;

					attempt += 1;
				},
				Err(err) => return Err(err),
			}
		}
	}
}
