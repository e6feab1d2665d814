use std::sync::Arc;

use bridge_service::Bridge;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<Bridge>,
}
impl AppState {
	pub fn new(config: bridge_config::Config) -> bridge_service::Result<Self> {
		Ok(Self { service: Arc::new(Bridge::new(config)?) })
	}
}
