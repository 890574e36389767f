use crate::SummarySet;
use crate::WordBankSummary;
use crate::escape_html;

/// Replace every `{{N}}` blank marker in `text` with the markup returned by
/// `blank(N)`. Whitespace inside the braces is allowed (`{{ 3 }}`). Text
/// around the markers, including braces that do not form a marker, is kept
/// verbatim.
pub fn fill_blanks<F>(text: &str, mut blank: F) -> String
where
	F: FnMut(u32) -> String,
{
	let mut output = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(open) = rest.find("{{") {
		output.push_str(&rest[..open]);
		let candidate = &rest[open..];
		if let Some((number, consumed)) = parse_blank(candidate) {
			output.push_str(&blank(number));
			rest = &candidate[consumed..];
		} else {
			output.push('{');
			rest = &candidate[1..];
		}
	}

	output.push_str(rest);
	output
}

/// Parse a marker at the start of `input`, returning the question number and
/// the byte length of the marker.
fn parse_blank(input: &str) -> Option<(u32, usize)> {
	let inner = input.strip_prefix("{{")?.trim_start();
	let digits = inner.bytes().take_while(u8::is_ascii_digit).count();
	if digits == 0 {
		return None;
	}

	let number = inner[..digits].parse().ok()?;
	let after = inner[digits..].trim_start().strip_prefix("}}")?;
	Some((number, input.len() - after.len()))
}

/// Free-text variant: each blank becomes a text input.
pub(super) fn render_free_text(set: &SummarySet<'_>) -> String {
	render_paragraphs(set, |number| {
		format!("<input type=\"text\" class=\"answer-input\" id=\"q{number}\" placeholder=\"{number}\">")
	})
}

/// Word-bank variant: a bank of draggable entries followed by paragraphs whose
/// blanks are drop targets in the same drag-group.
pub(super) fn render_word_bank(set: &WordBankSummary<'_>) -> String {
	let drag_group = escape_html(&set.drag_group);

	let items = set
		.word_bank
		.iter()
		.map(|item| {
			let item = escape_html(item);
			format!(
				"                                <div class=\"drag-item\" draggable=\"true\" \
				 data-value=\"{item}\" data-dnd-group=\"{drag_group}\">{item}</div>"
			)
		})
		.collect::<Vec<_>>()
		.join("\n");

	let paragraphs = render_paragraphs(&set.summary, |number| {
		format!(
			"<span class=\"summary-drop-zone drop-zone\" id=\"q{number}\" data-q-start=\"{number}\" \
			 data-q-end=\"{number}\" data-dnd-group=\"{drag_group}\">{number}</span>"
		)
	});

	format!(
		"
                            <div class=\"drag-options-container\" data-dnd-group=\"{drag_group}\">
{items}
                            </div>
{paragraphs}"
	)
}

fn render_paragraphs<F>(set: &SummarySet<'_>, mut blank: F) -> String
where
	F: FnMut(u32) -> String,
{
	set.paragraphs
		.iter()
		.map(|paragraph| format!("                            <p>{}</p>", fill_blanks(paragraph, &mut blank)))
		.collect::<Vec<_>>()
		.join("\n")
}
