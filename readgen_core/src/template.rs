use crate::ReadgenError;
use crate::ReadgenResult;
use crate::TestMeta;

/// Placeholder replaced by the serialized metadata script.
pub const META_PLACEHOLDER: &str = "<!-- TEST_META_SCRIPT -->";

/// The base reading page bundled with the crate. Contains every section
/// marker pair once plus [`META_PLACEHOLDER`].
pub const DEFAULT_TEMPLATE: &str = include_str!("base_reading.html");

/// A marker-delimited region of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
	PartHeaders,
	Passages,
	Questions,
	FooterNav,
}

impl Section {
	pub const ALL: [Self; 4] = [
		Self::PartHeaders,
		Self::Passages,
		Self::Questions,
		Self::FooterNav,
	];

	pub fn key(self) -> &'static str {
		match self {
			Self::PartHeaders => "PART_HEADERS",
			Self::Passages => "PASSAGES",
			Self::Questions => "QUESTIONS",
			Self::FooterNav => "FOOTER_NAV",
		}
	}

	pub fn start_marker(self) -> String {
		format!("<!-- {}_START -->", self.key())
	}

	pub fn end_marker(self) -> String {
		format!("<!-- {}_END -->", self.key())
	}
}

/// Replace the first `<!-- KEY_START -->...<!-- KEY_END -->` span with the
/// given content, keeping both markers.
///
/// Returns `None` when the pair is missing, in which case the caller keeps the
/// template unchanged.
pub fn replace_section(template: &str, key: &str, content: &str) -> Option<String> {
	let start_marker = format!("<!-- {key}_START -->");
	let end_marker = format!("<!-- {key}_END -->");

	let start = template.find(&start_marker)?;
	let body_start = start + start_marker.len();
	let end = body_start + template[body_start..].find(&end_marker)?;
	let tail = end + end_marker.len();

	let mut result = String::with_capacity(template.len() + content.len());
	result.push_str(&template[..start]);
	result.push_str(&start_marker);
	result.push('\n');
	result.push_str(content);
	result.push('\n');
	result.push_str(&end_marker);
	result.push_str(&template[tail..]);

	Some(result)
}

/// Serialize the metadata as the `window.testMeta` script element.
///
/// `<` is written as `\u003c` so no answer text can terminate the script
/// element early. The payload is still valid JSON.
pub fn meta_script(meta: &TestMeta) -> ReadgenResult<String> {
	let json = serde_json::to_string(meta).map_err(|e| ReadgenError::MetaSerialize(e.to_string()))?;
	let json = json.replace('<', "\\u003c");
	Ok(format!("<script>window.testMeta = {json};</script>"))
}

/// Replace the first [`META_PLACEHOLDER`] with the metadata script.
///
/// Returns `None` when the placeholder is missing.
pub fn inject_meta_script(template: &str, meta: &TestMeta) -> ReadgenResult<Option<String>> {
	if !template.contains(META_PLACEHOLDER) {
		return Ok(None);
	}

	let script = meta_script(meta)?;
	Ok(Some(template.replacen(META_PLACEHOLDER, &script, 1)))
}
