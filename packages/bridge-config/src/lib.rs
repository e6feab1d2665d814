mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Search, Security, Service, Upstream};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.upstream.base_url.trim().is_empty() {
		return Err(Error::Validation {
			message: "upstream.base_url must be non-empty.".to_string(),
		});
	}
	if cfg.upstream.connect_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "upstream.connect_timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.upstream.read_timeout_ms == 0 {
		return Err(Error::Validation {
			message: "upstream.read_timeout_ms must be greater than zero.".to_string(),
		});
	}
	if let Some(key) = cfg.security.api_key.as_ref()
		&& key.trim().is_empty()
	{
		return Err(Error::Validation {
			message: "security.api_key must be non-empty when set; omit it to disable the check."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.upstream.base_url.ends_with('/') {
		cfg.upstream.base_url.pop();
	}
}
