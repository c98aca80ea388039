use std::collections::HashMap;

use qdrant_client::qdrant::{ScoredPoint, Value, point_id::PointIdOptions, value::Kind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use qna_domain::rank::{self, RetrievedPair};

use crate::{Error, QnaService, Result};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatRequest {
	pub question: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatResponse {
	pub answer: String,
	pub source: Option<String>,
	pub confidence: f32,
}

impl QnaService {
	/// The retrieval pipeline: embed the question, fetch top-K stored pairs,
	/// rerank with the keyword bonus, and either answer verbatim from the
	/// best pair or decline.
	pub async fn chat(&self, req: ChatRequest) -> Result<ChatResponse> {
		let question = req.question.trim();

		if question.is_empty() {
			return Err(Error::InvalidRequest {
				message: "question must be non-empty.".to_string(),
			});
		}

		info!(question_chars = question.chars().count(), "Received chat question.");

		let vector = self.embed_question(question).await?;
		let points = self.qdrant.query_top_k(vector, self.cfg.answer.top_k).await?;

		debug!(candidates = points.len(), "Vector search returned candidates.");

		let pairs = collect_qa_matches(&points);

		if pairs.is_empty() {
			info!("No stored pairs matched; replying with the no-match fallback.");

			return Ok(ChatResponse {
				answer: self.cfg.answer.no_match_message.clone(),
				source: None,
				confidence: 0.0,
			});
		}

		let ranked = rank::rerank(question, pairs, &self.cfg.answer);

		for (idx, item) in ranked.iter().take(3).enumerate() {
			debug!(
				rank = idx + 1,
				adjusted_score = item.adjusted_score,
				retrieval_score = item.pair.score,
				question = %item.pair.question,
				"Rerank candidate."
			);
		}

		let top = &ranked[0];
		let confidence = rank::confidence_percent(top.adjusted_score);

		if !rank::clears_threshold(top.adjusted_score, self.cfg.answer.similarity_threshold) {
			info!(
				adjusted_score = top.adjusted_score,
				threshold = self.cfg.answer.similarity_threshold,
				"Top candidate is below the similarity threshold; declining."
			);

			return Ok(ChatResponse {
				answer: self.cfg.answer.low_confidence_message.clone(),
				source: None,
				confidence,
			});
		}

		info!(
			adjusted_score = top.adjusted_score,
			source = %top.pair.question,
			"Answering from the stored pair."
		);

		Ok(ChatResponse {
			answer: top.pair.answer.clone(),
			source: Some(top.pair.question.clone()),
			confidence,
		})
	}

	async fn embed_question(&self, question: &str) -> Result<Vec<f32>> {
		let vector =
			self.providers.embedding.embed(&self.cfg.providers.embedding, question).await?;

		if vector.len() != self.cfg.storage.qdrant.vector_dim as usize {
			return Err(Error::Provider {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}

		Ok(vector)
	}
}

/// Converts scored points into Q&A pairs. Points with a malformed payload
/// are skipped with a warning, never a failure.
fn collect_qa_matches(points: &[ScoredPoint]) -> Vec<RetrievedPair> {
	let mut out = Vec::with_capacity(points.len());

	for point in points {
		let Some(question) = payload_str(&point.payload, "question") else {
			warn!("Match point is missing a question payload.");

			continue;
		};
		let Some(answer) = payload_str(&point.payload, "answer") else {
			warn!(question = %question, "Match point is missing an answer payload.");

			continue;
		};

		out.push(RetrievedPair { id: point_id_label(point), question, answer, score: point.score });
	}

	out
}

fn point_id_label(point: &ScoredPoint) -> String {
	match point.id.as_ref().and_then(|id| id.point_id_options.as_ref()) {
		Some(PointIdOptions::Uuid(id)) => id.clone(),
		Some(PointIdOptions::Num(id)) => id.to_string(),
		None => String::new(),
	}
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
	let value = payload.get(key)?;

	match &value.kind {
		Some(Kind::StringValue(text)) => Some(text.clone()),
		_ => None,
	}
}
