mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Answer, Config, EmbeddingProviderConfig, Providers, Qdrant, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.admin_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.admin_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.qdrant.url.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.qdrant.url must be non-empty.".to_string(),
		});
	}
	if cfg.storage.qdrant.collection.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.qdrant.collection must be non-empty.".to_string(),
		});
	}
	if cfg.storage.qdrant.vector_dim == 0 {
		return Err(Error::Validation {
			message: "storage.qdrant.vector_dim must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}
	if cfg.providers.embedding.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.answer.top_k == 0 {
		return Err(Error::Validation {
			message: "answer.top_k must be greater than zero.".to_string(),
		});
	}
	if !cfg.answer.similarity_threshold.is_finite() {
		return Err(Error::Validation {
			message: "answer.similarity_threshold must be a finite number.".to_string(),
		});
	}
	if cfg.answer.similarity_threshold < 0.0 {
		return Err(Error::Validation {
			message: "answer.similarity_threshold must be zero or greater.".to_string(),
		});
	}
	if !cfg.answer.keyword_bonus.is_finite() {
		return Err(Error::Validation {
			message: "answer.keyword_bonus must be a finite number.".to_string(),
		});
	}
	if cfg.answer.keyword_bonus < 0.0 {
		return Err(Error::Validation {
			message: "answer.keyword_bonus must be zero or greater.".to_string(),
		});
	}
	if !cfg.answer.exact_match_bonus.is_finite() {
		return Err(Error::Validation {
			message: "answer.exact_match_bonus must be a finite number.".to_string(),
		});
	}
	if cfg.answer.exact_match_bonus < 0.0 {
		return Err(Error::Validation {
			message: "answer.exact_match_bonus must be zero or greater.".to_string(),
		});
	}
	if cfg.answer.min_keyword_chars == 0 {
		return Err(Error::Validation {
			message: "answer.min_keyword_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.answer.no_match_message.trim().is_empty() {
		return Err(Error::Validation {
			message: "answer.no_match_message must be non-empty.".to_string(),
		});
	}
	if cfg.answer.low_confidence_message.trim().is_empty() {
		return Err(Error::Validation {
			message: "answer.low_confidence_message must be non-empty.".to_string(),
		});
	}

	Ok(())
}
