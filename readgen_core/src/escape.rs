/// Escape text for safe interpolation into an HTML attribute or text node.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Ampersands go first so existing
/// entities are escaped rather than preserved.
pub fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Inclusive span of question numbers covered by a group or part.
///
/// An empty span is `0..=0` and renders no range title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionRange {
	pub start: u32,
	pub end: u32,
}

impl QuestionRange {
	/// Derive the range from a collection of question numbers, in any order.
	pub fn from_numbers<I>(numbers: I) -> Self
	where
		I: IntoIterator<Item = u32>,
	{
		numbers
			.into_iter()
			.fold(None, |range: Option<Self>, n| {
				Some(match range {
					None => Self { start: n, end: n },
					Some(range) => {
						Self {
							start: range.start.min(n),
							end: range.end.max(n),
						}
					}
				})
			})
			.unwrap_or_default()
	}

	/// True when both ends are known (non-zero).
	pub fn is_known(self) -> bool {
		self.start != 0 && self.end != 0
	}

	/// `start-end`, or an empty string when the range is unknown.
	pub fn label(self) -> String {
		if self.is_known() {
			format!("{}-{}", self.start, self.end)
		} else {
			String::new()
		}
	}
}
