use serde_json::Value;
use serde_json::json;

use crate::GroupData;
use crate::TestData;

pub(crate) fn test_from(value: Value) -> TestData {
	serde_json::from_value(value).unwrap_or_else(|e| panic!("invalid fixture: {e}"))
}

pub(crate) fn group_from(value: Value) -> GroupData {
	serde_json::from_value(value).unwrap_or_else(|e| panic!("invalid group fixture: {e}"))
}

/// One part, one TFNG group with statements 1 and 2, no blanks in the passage.
pub(crate) fn single_tfng_test() -> TestData {
	test_from(json!({
		"test_id": "tfng-demo",
		"parts": [{
			"part": 1,
			"passage": {
				"title": "The Honey Bee",
				"paragraphs": [
					"Bees are <em>social</em> insects.",
					"A colony can hold tens of thousands of workers."
				]
			},
			"question_groups": [{
				"type": "TFNG",
				"questions": [
					{ "number": 1, "statement": "Bees live alone.", "answer": "TRUE" },
					{ "number": 2, "statement": "Colonies are small.", "answer": "FALSE" }
				]
			}]
		}]
	}))
}

/// Two parts listed out of order, covering every renderable type.
pub(crate) fn full_test() -> TestData {
	test_from(json!({
		"test_id": "full-demo",
		"parts": [
			{
				"part": 2,
				"name": "Part Two",
				"passage": { "paragraphs": ["Second passage."] },
				"question_groups": [
					{
						"type": "summary_completion",
						"paragraphs": ["The city is {{6}} years old."],
						"answers": [{ "number": 6, "answer": "400" }]
					},
					{
						"type": "SUMMARY_COMPLETION_BOX",
						"group_id": "harbour",
						"word_bank": ["trade", "fish & chips"],
						"paragraphs": ["Ships brought {{7}} and {{ 8 }}."],
						"answers": [
							{ "number": 7, "answer": "trade" },
							{ "number": 8, "answer": "fish & chips" }
						]
					},
					{
						"type": "SENTENCE_COMPLETION",
						"questions": [
							{ "number": 9, "sentence_before": "The port opened in", "sentence_after": ".", "answer": "1820" }
						]
					},
					{
						"type": "SHORT_ANSWER",
						"instructions": "Answer briefly.\nUse one word.",
						"questions": [{ "number": 10, "answer": "salt" }]
					}
				]
			},
			{
				"part": 1,
				"passage": { "title": "Harbours", "paragraphs": ["First passage."] },
				"question_groups": [
					{
						"type": "YNNG",
						"questions": [{ "number": 1, "statement": "Ports matter.", "answer": "YES" }]
					},
					{
						"type": "MCQ",
						"subtype": "multiple",
						"questions": [{
							"number": 2,
							"question_text": "Which two goods?",
							"options": [
								{ "label": "A", "text": "Salt" },
								{ "label": "B", "text": "Wool" }
							],
							"answer": ["A", "B"]
						}]
					},
					{
						"type": "MATCH_HEADINGS",
						"options": [
							{ "label": "i", "text": "Early trade" },
							{ "label": "ii", "text": "Decline" }
						],
						"questions": [
							{ "number": 3, "prompt": "Paragraph A", "answer": "i" },
							{ "number": 4, "prompt": "Paragraph B", "answer": "ii" }
						]
					},
					{
						"type": "MATCH_OPTIONS",
						"questions": [{ "number": 5, "prompt": "Founder" }]
					}
				]
			}
		]
	}))
}

/// A template holding every marker pair once, with filler between markers.
pub(crate) fn marker_template() -> &'static str {
	"<html>\n<!-- PART_HEADERS_START -->old headers<!-- PART_HEADERS_END -->\n<!-- PASSAGES_START \
	 -->old passages<!-- PASSAGES_END -->\n<!-- QUESTIONS_START -->old questions<!-- QUESTIONS_END \
	 -->\n<!-- FOOTER_NAV_START -->old footer<!-- FOOTER_NAV_END -->\n<!-- TEST_META_SCRIPT \
	 -->\n</html>\n"
}
