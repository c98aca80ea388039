use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub answer: Answer,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub admin_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

/// Retrieval and answering knobs for the chat pipeline.
///
/// `similarity_threshold` is compared against the keyword-adjusted score, so
/// values above 1.0 are legal even though raw cosine similarity is not.
#[derive(Debug, Deserialize)]
pub struct Answer {
	#[serde(default = "default_top_k")]
	pub top_k: u32,
	#[serde(default = "default_similarity_threshold")]
	pub similarity_threshold: f32,
	#[serde(default = "default_keyword_bonus")]
	pub keyword_bonus: f32,
	#[serde(default = "default_exact_match_bonus")]
	pub exact_match_bonus: f32,
	#[serde(default = "default_min_keyword_chars")]
	pub min_keyword_chars: u32,
	#[serde(default = "default_no_match_message")]
	pub no_match_message: String,
	#[serde(default = "default_low_confidence_message")]
	pub low_confidence_message: String,
}

fn default_top_k() -> u32 {
	10
}

fn default_similarity_threshold() -> f32 {
	0.65
}

fn default_keyword_bonus() -> f32 {
	0.1
}

fn default_exact_match_bonus() -> f32 {
	0.5
}

fn default_min_keyword_chars() -> u32 {
	3
}

fn default_no_match_message() -> String {
	"Sorry, I could not find an answer to that question.".to_string()
}

fn default_low_confidence_message() -> String {
	"Sorry, I cannot give a confident answer. Could you rephrase the question?".to_string()
}
