use crate::ChoiceOption;
use crate::MatchingSet;
use crate::escape_html;

/// Optional reference list of candidates followed by one select per question.
/// Every select offers a blank entry and then one entry per candidate label.
pub(super) fn render(set: &MatchingSet<'_>) -> String {
	let options = set.options.unwrap_or_default();
	let options_box = set
		.options
		.map(|options| reference_box(set, options))
		.unwrap_or_default();

	let select_options: String = options
		.iter()
		.map(|option| {
			let label = escape_html(option.label());
			format!("<option value=\"{label}\">{label}</option>")
		})
		.collect();

	let rows = set
		.questions
		.iter()
		.map(|question| {
			let number = question.number_or_zero();
			let prompt = question.prompt.as_deref().unwrap_or_default();
			format!(
				"<div class=\"matching-form-row\">
                                    <label for=\"q{number}\" class=\"matching-form-label\"><strong>{number}</strong>&nbsp;&nbsp;{prompt}</label>
                                    <select class=\"answer-input\" id=\"q{number}\"><option value=\"\"></option>{select_options}</select>
                                </div>"
			)
		})
		.collect::<Vec<_>>()
		.join("\n");

	format!(
		"{options_box}
                            <div class=\"matching-form-container\">
{rows}
                            </div>"
	)
}

fn reference_box(set: &MatchingSet<'_>, options: &[ChoiceOption]) -> String {
	let items = options
		.iter()
		.map(|option| format!("<li>{} {}</li>", escape_html(option.label()), option.text()))
		.collect::<Vec<_>>()
		.join("\n");

	format!(
		"
                            <div class=\"example-box\" style=\"font-size: 15px;\">
                                <p><strong>{title}</strong></p>
                                <ul style=\"list-style-type: {style}; margin-left: 20px;\">
{items}
                                </ul>
                            </div>",
		title = set.options_title,
		style = escape_html(set.list_style),
	)
}
