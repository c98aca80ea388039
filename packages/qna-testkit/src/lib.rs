mod error;

pub use error::{Error, Result};

use std::{env, thread, time::Duration};

use qdrant_client::{
	Payload, Qdrant,
	qdrant::{
		CreateCollectionBuilder, Distance, PointStruct, UpsertPointsBuilder, VectorParamsBuilder,
	},
};
use tokio::{runtime::Builder, time};
use uuid::Uuid;

pub fn env_qdrant_url() -> Option<String> {
	env::var("QNA_QDRANT_URL").ok()
}

/// A uniquely named cosine collection seeded with Q&A payload points, for
/// acceptance tests against a live Qdrant. Dropped collections are deleted
/// best-effort if `cleanup` was not called.
pub struct TestCollection {
	name: String,
	url: String,
	client: Qdrant,
	cleaned: bool,
}
impl TestCollection {
	pub async fn create(url: &str, prefix: &str, vector_dim: u64) -> Result<Self> {
		let client = Qdrant::from_url(url).build()?;
		let name = format!("{prefix}_{}", Uuid::new_v4().simple());

		client
			.create_collection(
				CreateCollectionBuilder::new(name.clone())
					.vectors_config(VectorParamsBuilder::new(vector_dim, Distance::Cosine)),
			)
			.await?;

		Ok(Self { name, url: url.to_string(), client, cleaned: false })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Upserts one pre-embedded Q&A pair with the payload shape the chat
	/// pipeline reads (`question` and `answer` string keys).
	pub async fn seed_pair(
		&self,
		id: u64,
		question: &str,
		answer: &str,
		vector: Vec<f32>,
	) -> Result<()> {
		let mut payload = Payload::new();

		payload.insert("question", question.to_string());
		payload.insert("answer", answer.to_string());

		let point = PointStruct::new(id, vector, payload);

		self.client
			.upsert_points(UpsertPointsBuilder::new(self.name.clone(), vec![point]).wait(true))
			.await?;

		Ok(())
	}

	pub async fn cleanup(mut self) -> Result<()> {
		delete_collection(&self.url, &self.name).await?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestCollection {
	fn drop(&mut self) {
		if self.cleaned {
			return;
		}

		let url = self.url.clone();
		let name = self.name.clone();
		let cleanup_thread = thread::spawn(move || {
			let runtime = match Builder::new_current_thread().enable_all().build() {
				Ok(runtime) => runtime,
				Err(err) => {
					eprintln!("Test collection cleanup failed: {err}.");

					return;
				},
			};

			if let Err(err) = runtime.block_on(delete_collection(&url, &name)) {
				eprintln!("Test collection cleanup failed: {err}.");
			}
		});
		let _ = cleanup_thread.join();
	}
}

async fn delete_collection(url: &str, name: &str) -> Result<()> {
	let client = Qdrant::from_url(url).build()?;
	let max_attempts = 3;
	let mut backoff = Duration::from_millis(100);

	for attempt in 1..=max_attempts {
		let result =
			time::timeout(Duration::from_secs(10), client.delete_collection(name.to_string()))
				.await;

		match result {
			Ok(Ok(_)) => return Ok(()),
			Ok(Err(err)) =>
				if attempt == max_attempts {
					return Err(Error::Message(format!(
						"Failed to delete test collection {name:?} after {attempt} attempts: {err}."
					)));
				},
			Err(_) =>
				if attempt == max_attempts {
					return Err(Error::Message(format!(
						"Timed out deleting test collection {name:?} after {attempt} attempts."
					)));
				},
		}

		time::sleep(backoff).await;

		backoff = backoff.saturating_mul(2).min(Duration::from_secs(2));
	}

	Ok(())
}
