use std::collections::HashSet;

use crate::QuestionType;
use crate::TestData;

/// Check the structural rules of a test and collect every violation.
///
/// An empty result means the test can be rendered. A missing or empty
/// `parts` list is reported on its own since nothing else can be checked.
pub fn validate(test: &TestData) -> Vec<String> {
	let mut errors = Vec::new();
	if test.parts.is_empty() {
		errors.push("parts array is required".to_string());
		return errors;
	}

	let mut seen: HashSet<u32> = HashSet::new();
	for part in &test.parts {
		if part.id().is_none() {
			errors.push("each part needs a numeric \"part\" field".to_string());
		}

		for group in &part.question_groups {
			if QuestionType::parse(&group.kind).is_none() {
				errors.push(format!("unsupported question type: {}", group.kind));
			}

			for number in group.question_numbers() {
				if !seen.insert(number) {
					errors.push(format!("duplicate question number {number}"));
				}
			}
		}
	}

	if seen.is_empty() {
		errors.push("no questions detected".to_string());
	}

	errors
}
