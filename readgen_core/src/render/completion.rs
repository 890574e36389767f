use crate::GapSet;

pub(super) fn render(set: &GapSet<'_>) -> String {
	set.questions
		.iter()
		.map(|question| {
			let number = question.number_or_zero();
			format!(
				"<p>{before}<input type=\"text\" class=\"answer-input\" id=\"q{number}\" \
				 placeholder=\"{number}\">{after}</p>",
				before = question.sentence_before.as_deref().unwrap_or_default(),
				after = question.sentence_after.as_deref().unwrap_or_default(),
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}
