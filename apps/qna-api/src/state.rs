use std::sync::Arc;

use qna_service::QnaService;
use qna_storage::qdrant::QdrantStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<QnaService>,
}
impl AppState {
	pub fn new(config: qna_config::Config) -> color_eyre::Result<Self> {
		let qdrant = QdrantStore::new(&config.storage.qdrant)?;
		let service = QnaService::new(config, qdrant);

		Ok(Self { service: Arc::new(service) })
	}
}
