pub mod admin;
pub mod chat;

mod error;

pub use admin::IndexStats;
pub use chat::{ChatRequest, ChatResponse};
pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use qna_config::{Config, EmbeddingProviderConfig};
use qna_providers::embedding;
use qna_storage::qdrant::QdrantStore;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam for injecting a deterministic embedder in tests; the default
/// implementation calls the configured external embedding API.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
}
impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
		Self { embedding }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { embedding: Arc::new(DefaultProviders) }
	}
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>> {
		Box::pin(embedding::embed(cfg, text))
	}
}

pub struct QnaService {
	pub cfg: Config,
	pub qdrant: QdrantStore,
	pub providers: Providers,
}
impl QnaService {
	pub fn new(cfg: Config, qdrant: QdrantStore) -> Self {
		Self { cfg, qdrant, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, qdrant: QdrantStore, providers: Providers) -> Self {
		Self { cfg, qdrant, providers }
	}
}
