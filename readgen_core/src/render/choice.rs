use crate::ChoiceSet;
use crate::escape_html;

pub(super) fn render(set: &ChoiceSet<'_>) -> String {
	let input_type = if set.multiple { "checkbox" } else { "radio" };

	set.questions
		.iter()
		.map(|question| {
			let number = question.number_or_zero();
			let question_text = question.question_text.as_deref().unwrap_or_default();
			let options = question
				.options
				.iter()
				.map(|option| {
					format!(
						"<div class=\"multi-choice-option\"><label><input type=\"{input_type}\" \
						 name=\"q{number}\" value=\"{value}\"> {text}</label></div>",
						value = escape_html(option.label()),
						text = option.text(),
					)
				})
				.collect::<Vec<_>>()
				.join("\n");

			format!(
				"<div class=\"multi-choice-question\" data-q-start=\"{number}\" data-q-end=\"{number}\">
                                <div class=\"multi-choice-options\">
                                    <p><strong>{question_text}</strong></p>
{options}
                                </div>
                            </div>"
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}
