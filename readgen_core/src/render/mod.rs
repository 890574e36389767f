//! Question-group renderers. Each renderer turns one typed group into an HTML
//! fragment; [`render_question_group`] dispatches on the group type.

use crate::GroupBody;
use crate::GroupData;
use crate::QuestionGroup;
use crate::QuestionRange;
use crate::ReadgenResult;
use crate::default_instructions;
use crate::instructions::render_instructions_block;

mod choice;
mod completion;
mod matching;
mod statements;
mod summary;

pub use summary::fill_blanks;

/// Render one raw group for the given part.
///
/// Fails with [`crate::ReadgenError::UnsupportedQuestionType`] when the group's
/// type has no renderer.
pub fn render_question_group(group: &GroupData, part: i64) -> ReadgenResult<String> {
	let group = QuestionGroup::from_data(group)?;
	Ok(render_typed_group(&group, part))
}

/// Render an already-resolved group.
pub fn render_typed_group(group: &QuestionGroup<'_>, part: i64) -> String {
	let range = group.range();
	let prompt = group_prompt(group, range, part);

	let body = match &group.body {
		GroupBody::TrueFalseNotGiven(set) | GroupBody::YesNoNotGiven(set) => {
			statements::render(set)
		}
		GroupBody::MultipleChoice(set) => choice::render(set),
		GroupBody::MatchOptions(set) | GroupBody::MatchHeadings(set) => matching::render(set),
		GroupBody::SummaryCompletion(set) => summary::render_free_text(set),
		GroupBody::SummaryCompletionBox(set) => summary::render_word_bank(set),
		GroupBody::SentenceCompletion(set) | GroupBody::ShortAnswer(set) => {
			completion::render(set)
		}
	};

	wrap_group(range, &prompt, &body)
}

/// The instruction block for a group: explicit instructions when present,
/// otherwise the synthesized default for its type.
fn group_prompt(group: &QuestionGroup<'_>, range: QuestionRange, part: i64) -> String {
	match group.instructions {
		Some(text) => render_instructions_block(text, range),
		None => {
			let text = default_instructions(
				group.question_type().as_str(),
				range,
				part,
				group.is_multiple(),
			);
			render_instructions_block(&text, range)
		}
	}
}

fn wrap_group(range: QuestionRange, prompt: &str, body: &str) -> String {
	format!(
		"<div class=\"question\" data-q-start=\"{start}\" data-q-end=\"{end}\">\n{prompt}\n{body}\n                        </div>",
		start = range.start,
		end = range.end,
	)
}
