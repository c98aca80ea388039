use qdrant_client::qdrant::{CollectionInfo, Query, QueryPointsBuilder, ScoredPoint};

use crate::Result;

/// Handle to the managed vector store holding the pre-embedded Q&A pairs.
///
/// The collection is cosine-distance over `vector_dim`-dimensional vectors,
/// so retrieval scores come back as cosine similarities. Each point carries
/// `question` and `answer` string payload keys; the ingestion side owns the
/// upserts and is outside this repository.
pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl QdrantStore {
	pub fn new(cfg: &qna_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}

	/// Nearest-neighbor search for the query vector, payload included.
	pub async fn query_top_k(&self, vector: Vec<f32>, limit: u32) -> Result<Vec<ScoredPoint>> {
		let request = QueryPointsBuilder::new(self.collection.clone())
			.query(Query::new_nearest(vector))
			.with_payload(true)
			.limit(limit as u64);
		let response = self.client.query(request).await?;

		Ok(response.result)
	}

	pub async fn collection_info(&self) -> Result<Option<CollectionInfo>> {
		let response = self.client.collection_info(self.collection.clone()).await?;

		Ok(response.result)
	}
}
