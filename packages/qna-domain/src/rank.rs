use serde::{Deserialize, Serialize};

use qna_config::Answer;

/// A vector-store match together with its retrieval (cosine) similarity.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RetrievedPair {
	pub id: String,
	pub question: String,
	pub answer: String,
	pub score: f32,
}

#[derive(Clone, Debug)]
pub struct RankedPair {
	pub pair: RetrievedPair,
	pub adjusted_score: f32,
}

/// Additive bonus for query keywords that appear in the stored question.
///
/// Tokens shorter than `min_keyword_chars` never contribute; duplicate query
/// tokens each contribute. Comparison is on the lowercased strings.
pub fn keyword_bonus(query: &str, candidate_question: &str, cfg: &Answer) -> f32 {
	let query_lower = query.to_lowercase();
	let candidate_lower = candidate_question.to_lowercase();
	let mut bonus = 0.0;

	for token in query_lower.split_whitespace() {
		if token.chars().count() >= cfg.min_keyword_chars as usize
			&& candidate_lower.contains(token)
		{
			bonus += cfg.keyword_bonus;
		}
	}
	if candidate_lower == query_lower {
		bonus += cfg.exact_match_bonus;
	}

	bonus
}

/// Reranks retrieval matches by `score + keyword_bonus`, descending.
///
/// The sort is stable, so equal adjusted scores keep retrieval order.
pub fn rerank(query: &str, pairs: Vec<RetrievedPair>, cfg: &Answer) -> Vec<RankedPair> {
	let mut ranked = pairs
		.into_iter()
		.map(|pair| {
			let adjusted_score = pair.score + keyword_bonus(query, &pair.question, cfg);

			RankedPair { pair, adjusted_score }
		})
		.collect::<Vec<_>>();

	ranked.sort_by(|a, b| b.adjusted_score.total_cmp(&a.adjusted_score));

	ranked
}

/// Converts an adjusted score to the 0-100 confidence reported to clients.
pub fn confidence_percent(score: f32) -> f32 {
	(score * 100.0).min(100.0)
}

/// A score exactly at the threshold answers; only strictly-below declines.
pub fn clears_threshold(adjusted_score: f32, threshold: f32) -> bool {
	adjusted_score >= threshold
}

#[cfg(test)]
mod tests {
	use super::*;

	fn answer_cfg() -> Answer {
		Answer {
			top_k: 10,
			similarity_threshold: 0.65,
			keyword_bonus: 0.1,
			exact_match_bonus: 0.5,
			min_keyword_chars: 3,
			no_match_message: "no match".to_string(),
			low_confidence_message: "low confidence".to_string(),
		}
	}

	#[test]
	fn short_tokens_never_contribute() {
		let cfg = answer_cfg();
		let bonus = keyword_bonus("is it on", "is the light on", &cfg);

		assert_eq!(bonus, 0.0);
	}

	#[test]
	fn each_contained_keyword_adds_bonus() {
		let cfg = answer_cfg();
		let bonus = keyword_bonus("reset password quickly", "How do I reset my password?", &cfg);

		// "reset" and "password" match; "quickly" does not.
		assert!((bonus - 0.2).abs() < 1e-6);
	}

	#[test]
	fn duplicate_tokens_each_contribute() {
		let cfg = answer_cfg();
		let bonus = keyword_bonus("password password", "Forgot password", &cfg);

		assert!((bonus - 0.2).abs() < 1e-6);
	}

	#[test]
	fn exact_match_adds_large_bonus() {
		let cfg = answer_cfg();
		let bonus = keyword_bonus("Forgot Password", "forgot password", &cfg);

		// Two keyword hits plus the exact-equality bonus.
		assert!((bonus - 0.7).abs() < 1e-6);
	}

	#[test]
	fn matching_is_char_based_for_non_ascii() {
		let cfg = answer_cfg();
		let bonus = keyword_bonus(
			"\u{BE44}\u{BC00}\u{BC88}\u{D638} \u{BCC0}\u{ACBD}",
			"\u{BE44}\u{BC00}\u{BC88}\u{D638} \u{BCC0}\u{ACBD} \u{BC29}\u{BC95}",
			&cfg,
		);

		// Only the four-char token clears min_keyword_chars.
		assert!((bonus - 0.1).abs() < 1e-6);
	}

	#[test]
	fn empty_query_has_no_bonus() {
		let cfg = answer_cfg();

		assert_eq!(keyword_bonus("", "anything", &cfg), 0.0);
	}
}
