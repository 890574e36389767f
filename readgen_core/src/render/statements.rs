use crate::StatementSet;
use crate::escape_html;

/// One `tf-question` block per statement with an exclusive choice between the
/// group's three options.
pub(super) fn render(set: &StatementSet<'_>) -> String {
	set.questions
		.iter()
		.map(|question| {
			let number = question.number_or_zero();
			let statement = question.statement.as_deref().unwrap_or_default();
			let options: String = set
				.choices
				.iter()
				.map(|choice| {
					let value = escape_html(choice);
					format!(
						"<label class=\"tf-option\"><input type=\"radio\" name=\"q{number}\" \
						 value=\"{value}\"> {value}</label>"
					)
				})
				.collect();

			format!(
				"<div class=\"tf-question\" data-q-start=\"{number}\" data-q-end=\"{number}\">
                                <div class=\"tf-question-line\"><span class=\"tf-question-number\">{number}</span><span class=\"tf-question-text\">{statement}</span></div>
                                <div class=\"tf-options\">{options}</div>
                            </div>"
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}
