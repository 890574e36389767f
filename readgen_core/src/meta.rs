use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::TestData;

/// Summary derived from a test: per-part ranges, the total question count and
/// the answer key. Serialized as the in-page `window.testMeta` payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TestMeta {
	#[serde(rename = "totalQuestions")]
	pub total_questions: u32,
	pub parts: Vec<PartMeta>,
	/// Correct answers keyed by question number. Keys serialize as strings
	/// (`"1"`, `"2"`, ...) in ascending numeric order.
	#[serde(rename = "correctAnswers")]
	pub correct_answers: BTreeMap<u32, serde_json::Value>,
}

/// The question range covered by one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PartMeta {
	pub part: i64,
	pub start: u32,
	pub end: u32,
}

impl PartMeta {
	/// Number of integers in `[start, end]`.
	pub fn span(&self) -> u32 {
		self.end.saturating_sub(self.start).saturating_add(1)
	}
}

impl TestMeta {
	/// Look up the range of a part by identifier.
	pub fn part(&self, part: i64) -> Option<&PartMeta> {
		self.parts.iter().find(|meta| meta.part == part)
	}
}

/// Derive the metadata for a test.
///
/// A part without any question numbers gets the degenerate range `1..=1`.
/// `totalQuestions` from the input wins when it is present and non-zero,
/// otherwise the largest part end is used. Parts are sorted by identifier.
pub fn build_meta(test: &TestData) -> TestMeta {
	let mut parts = Vec::with_capacity(test.parts.len());
	let mut correct_answers = BTreeMap::new();
	let mut max_question = 0;

	for part in &test.parts {
		let mut numbers = part.question_numbers();
		numbers.sort_unstable();
		let start = numbers.first().copied().unwrap_or(1);
		let end = numbers.last().copied().unwrap_or(start);
		max_question = max_question.max(end);

		for entry in part.question_groups.iter().flat_map(|group| group.entries()) {
			if let (Some(number), Some(answer)) = (entry.number, &entry.answer) {
				correct_answers.insert(number.get(), answer.clone());
			}
		}

		parts.push(PartMeta {
			part: part.id().unwrap_or_default(),
			start,
			end,
		});
	}

	parts.sort_by_key(|meta| meta.part);

	TestMeta {
		total_questions: test
			.total_questions
			.filter(|total| *total > 0)
			.unwrap_or(max_question),
		parts,
		correct_answers,
	}
}
