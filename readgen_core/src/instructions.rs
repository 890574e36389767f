use crate::QuestionRange;
use crate::escape_html;

/// Default exam instructions for a question type.
///
/// `kind` is matched case-insensitively, so raw tags from input data can be
/// passed in directly. `multiple` only matters for `MCQ`. Unknown types fall
/// back to `Questions <start>-<end>`, or an empty string when the range is
/// unknown.
pub fn default_instructions(kind: &str, range: QuestionRange, part: i64, multiple: bool) -> String {
	let q_range = range.label();

	match kind.trim().to_ascii_uppercase().as_str() {
		"TFNG" => {
			format!(
				"Do the following statements agree with the information given in Reading Passage \
				 {part}?\nIn boxes {q_range} on your answer sheet, write\nTRUE if the statement \
				 agrees with the information\nFALSE if the statement contradicts the \
				 information\nNOT GIVEN if there is no information on this"
			)
		}
		"YNNG" => {
			format!(
				"Do the following statements agree with the views of the writer?\nIn boxes \
				 {q_range} on your answer sheet, write\nYES if the statement agrees with the \
				 writer's views\nNO if the statement contradicts the writer's views\nNOT GIVEN if \
				 it is impossible to say what the writer thinks about this"
			)
		}
		"MATCH_HEADINGS" => {
			format!(
				"Choose the correct heading for each paragraph from the list below.\nWrite the \
				 correct number i-x in boxes {q_range} on your answer sheet."
			)
		}
		"MATCH_OPTIONS" => {
			format!(
				"Use the information in the passage to match the items.\nWrite the correct letter \
				 in boxes {q_range} on your answer sheet."
			)
		}
		"MATCH_ENDINGS" => {
			format!(
				"Complete the sentences below.\nChoose the correct ending from the box.\nWrite the \
				 correct letter in boxes {q_range} on your answer sheet."
			)
		}
		"MCQ" if multiple => {
			format!(
				"Choose TWO letters (unless stated otherwise).\nWrite the correct letters in boxes \
				 {q_range} on your answer sheet."
			)
		}
		"MCQ" => {
			format!(
				"Choose the correct letter A, B, C or D.\nWrite the correct letter in boxes \
				 {q_range} on your answer sheet."
			)
		}
		"SUMMARY_COMPLETION" => {
			format!(
				"Complete the summary below.\nWrite NO MORE THAN TWO WORDS from the passage for \
				 each answer.\nWrite your answers in boxes {q_range} on your answer sheet."
			)
		}
		"SUMMARY_COMPLETION_BOX" => {
			format!(
				"Choose the correct words from the box below to complete the summary.\nWrite your \
				 answers in boxes {q_range} on your answer sheet."
			)
		}
		"SENTENCE_COMPLETION" => {
			format!(
				"Complete the sentences below.\nWrite NO MORE THAN TWO WORDS from the passage for \
				 each answer.\nWrite your answers in boxes {q_range} on your answer sheet."
			)
		}
		"SHORT_ANSWER" => {
			format!(
				"Answer the questions below.\nWrite NO MORE THAN TWO WORDS AND/OR A NUMBER for \
				 each answer.\nWrite your answers in boxes {q_range} on your answer sheet."
			)
		}
		_ if q_range.is_empty() => String::new(),
		_ => format!("Questions {q_range}"),
	}
}

/// The `question-prompt` block shown above a group: a range title followed by
/// one escaped paragraph per non-empty instruction line.
pub(crate) fn render_instructions_block(instructions: &str, range: QuestionRange) -> String {
	let title = if range.is_known() {
		format!("<p><strong>Questions {}-{}</strong></p>", range.start, range.end)
	} else {
		String::new()
	};
	let body: String = instructions
		.lines()
		.filter(|line| !line.is_empty())
		.map(|line| format!("<p>{}</p>", escape_html(line)))
		.collect();

	if body.is_empty() && title.is_empty() {
		return String::new();
	}

	format!("<div class=\"question-prompt\">{title}{body}</div>")
}
