use qna_config::Answer;
use qna_domain::rank::{self, RetrievedPair};

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

fn pair(id: &str, question: &str, score: f32) -> RetrievedPair {
	RetrievedPair {
		id: id.to_string(),
		question: question.to_string(),
		answer: format!("answer for {id}"),
		score,
	}
}

#[test]
fn keyword_overlap_outranks_raw_similarity() {
	let cfg = answer_cfg();
	let pairs = vec![
		pair("a", "What are the office hours?", 0.70),
		pair("b", "How do I reset my password?", 0.62),
	];
	let ranked = rank::rerank("reset password", pairs, &cfg);

	// 0.62 + 0.2 keyword bonus beats 0.70 with no overlap.
	assert_eq!(ranked[0].pair.id, "b");
	assert!((ranked[0].adjusted_score - 0.82).abs() < 1e-6);
	assert_eq!(ranked[1].pair.id, "a");
	assert!((ranked[1].adjusted_score - 0.70).abs() < 1e-6);
}

#[test]
fn exact_question_wins_over_partial_overlap() {
	let cfg = answer_cfg();
	let pairs = vec![
		pair("partial", "how do i reset my password today", 0.80),
		pair("exact", "how do i reset my password", 0.80),
	];
	let ranked = rank::rerank("How do I reset my password", pairs, &cfg);

	assert_eq!(ranked[0].pair.id, "exact");
}

#[test]
fn equal_adjusted_scores_keep_retrieval_order() {
	let cfg = answer_cfg();
	let pairs = vec![
		pair("first", "unrelated one", 0.5),
		pair("second", "unrelated two", 0.5),
		pair("third", "unrelated three", 0.5),
	];
	let ranked = rank::rerank("zzz", pairs, &cfg);
	let order = ranked.iter().map(|item| item.pair.id.as_str()).collect::<Vec<_>>();

	assert_eq!(order, ["first", "second", "third"]);
}

#[test]
fn rerank_preserves_retrieval_scores() {
	let cfg = answer_cfg();
	let pairs = vec![pair("a", "reset password", 0.4)];
	let ranked = rank::rerank("reset password", pairs, &cfg);

	assert!((ranked[0].pair.score - 0.4).abs() < 1e-6);
	assert!(ranked[0].adjusted_score > ranked[0].pair.score);
}

#[test]
fn confidence_percent_caps_at_one_hundred() {
	assert!((rank::confidence_percent(0.731) - 73.1).abs() < 1e-3);
	assert_eq!(rank::confidence_percent(1.35), 100.0);
	assert_eq!(rank::confidence_percent(0.0), 0.0);
}

#[test]
fn threshold_boundary_answers() {
	assert!(rank::clears_threshold(0.65, 0.65));
	assert!(rank::clears_threshold(0.66, 0.65));
	assert!(!rank::clears_threshold(0.649_99, 0.65));
}
