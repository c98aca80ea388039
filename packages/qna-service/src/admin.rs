use serde::{Deserialize, Serialize};

use crate::{QnaService, Result};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IndexStats {
	pub collection: String,
	pub points_count: u64,
	pub vector_dim: u32,
}

impl QnaService {
	/// Reports the vector collection's point count for operational checks.
	pub async fn stats(&self) -> Result<IndexStats> {
		let info = self.qdrant.collection_info().await?;

		Ok(IndexStats {
			collection: self.qdrant.collection.clone(),
			points_count: info.and_then(|info| info.points_count).unwrap_or(0),
			vector_dim: self.qdrant.vector_dim,
		})
	}
}
