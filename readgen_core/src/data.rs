use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::ReadgenError;
use crate::ReadgenResult;

/// A reading test as supplied by the author, before validation.
///
/// Field names follow the on-disk schema, so `totalQuestions` keeps its camel
/// case while everything else is snake case.
///
/// ```json
/// {
///   "test_id": "reading-01",
///   "parts": [
///     {
///       "part": 1,
///       "passage": { "title": "Bees", "paragraphs": ["..."] },
///       "question_groups": [
///         { "type": "TFNG", "questions": [{ "number": 1, "statement": "...", "answer": "TRUE" }] }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TestData {
	#[serde(default)]
	pub test_id: Option<String>,
	#[serde(default, rename = "totalQuestions")]
	pub total_questions: Option<u32>,
	#[serde(default)]
	pub parts: Vec<PartData>,
}

/// One scored section of the test.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PartData {
	/// Raw part identifier. Kept untyped so the validator can report a
	/// non-numeric identifier instead of failing the whole parse.
	#[serde(default)]
	pub part: serde_json::Value,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub instructions: Option<String>,
	#[serde(default)]
	pub passage: Option<PassageData>,
	#[serde(default)]
	pub question_groups: Vec<GroupData>,
}

impl PartData {
	/// The numeric part identifier, if the input carries one.
	/// Whole-valued floats such as `1.0` count as numeric.
	pub fn id(&self) -> Option<i64> {
		self.part.as_i64().or_else(|| {
			self.part
				.as_f64()
				.filter(|value| value.fract().abs() < f64::EPSILON && value.abs() <= i64::MAX as f64)
				.map(|value| value as i64)
		})
	}

	/// Every question number contributed by this part's groups, in input order.
	pub fn question_numbers(&self) -> Vec<u32> {
		self.question_groups
			.iter()
			.flat_map(GroupData::question_numbers)
			.collect()
	}
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PassageData {
	#[serde(default)]
	pub title: Option<String>,
	/// Trusted rich text. May contain inline markup.
	#[serde(default)]
	pub paragraphs: Vec<String>,
}

/// A cluster of questions sharing one presentation type.
///
/// The `type` tag stays a string here; [`crate::QuestionGroup::from_data`]
/// turns it into a closed enum at render time.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupData {
	#[serde(default, rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub instructions: Option<String>,
	#[serde(default)]
	pub subtype: Option<String>,
	#[serde(default)]
	pub options: Option<Vec<ChoiceOption>>,
	#[serde(default)]
	pub options_title: Option<String>,
	#[serde(default)]
	pub options_list_style: Option<String>,
	#[serde(default)]
	pub questions: Option<Vec<QuestionData>>,
	#[serde(default)]
	pub answers: Option<Vec<QuestionData>>,
	#[serde(default)]
	pub items: Option<Vec<QuestionData>>,
	#[serde(default)]
	pub paragraphs: Vec<String>,
	#[serde(default)]
	pub word_bank: Vec<String>,
	#[serde(default)]
	pub dnd_group: Option<String>,
	#[serde(default)]
	pub group_id: Option<String>,
}

impl GroupData {
	/// All entries from `questions`, `answers` and `items`, in that order.
	pub fn entries(&self) -> impl Iterator<Item = &QuestionData> {
		[&self.questions, &self.answers, &self.items]
			.into_iter()
			.flatten()
			.flatten()
	}

	/// Question numbers of every entry that declares one.
	pub fn question_numbers(&self) -> Vec<u32> {
		self.entries()
			.filter_map(|entry| entry.number.map(QuestionNumber::get))
			.collect()
	}

	/// The `questions` list, or `items` when `questions` is absent or empty.
	pub fn questions(&self) -> &[QuestionData] {
		non_empty_or_items(self.questions.as_deref(), self.items.as_deref())
	}

	/// The `answers` list, or `items` when `answers` is absent or empty.
	pub fn answers(&self) -> &[QuestionData] {
		non_empty_or_items(self.answers.as_deref(), self.items.as_deref())
	}
}

fn non_empty_or_items<'a>(
	primary: Option<&'a [QuestionData]>,
	items: Option<&'a [QuestionData]>,
) -> &'a [QuestionData] {
	match primary {
		Some(entries) if !entries.is_empty() => entries,
		_ => items.unwrap_or_default(),
	}
}

/// A single answer box and its prompt fields.
///
/// Which prompt fields are read depends on the owning group's type.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuestionData {
	#[serde(default)]
	pub number: Option<QuestionNumber>,
	/// Correct answer. A string for most types, a list for multi-select MCQ.
	/// An explicit `null` is kept as `Some(Value::Null)`; only a missing
	/// field is `None`.
	#[serde(default, deserialize_with = "deserialize_present")]
	pub answer: Option<serde_json::Value>,
	#[serde(default)]
	pub statement: Option<String>,
	#[serde(default)]
	pub question_text: Option<String>,
	#[serde(default)]
	pub prompt: Option<String>,
	#[serde(default)]
	pub sentence_before: Option<String>,
	#[serde(default)]
	pub sentence_after: Option<String>,
	#[serde(default)]
	pub options: Vec<ChoiceOption>,
}

impl QuestionData {
	/// The question number, or `0` when it is missing.
	pub fn number_or_zero(&self) -> u32 {
		self.number.map_or(0, QuestionNumber::get)
	}
}

/// An option entry. Statement groups list bare strings (`"TRUE"`), matching
/// and multiple-choice groups list `{ label, text }` objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChoiceOption {
	Plain(String),
	Labeled {
		label: String,
		#[serde(default)]
		text: String,
	},
}

impl ChoiceOption {
	/// Option identity: the label, or the whole string for plain options.
	pub fn label(&self) -> &str {
		match self {
			Self::Plain(value) => value,
			Self::Labeled { label, .. } => label,
		}
	}

	/// Display text: the text, or the whole string for plain options.
	pub fn text(&self) -> &str {
		match self {
			Self::Plain(value) => value,
			Self::Labeled { text, .. } => text,
		}
	}
}

/// The globally unique integer identifying an answer box.
///
/// Accepts either an integer or a string holding one, so `"7"` and `7` are
/// the same question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawNumber", into = "u32")]
pub struct QuestionNumber(u32);

impl QuestionNumber {
	pub const fn new(value: u32) -> Self {
		Self(value)
	}

	pub const fn get(self) -> u32 {
		self.0
	}
}

impl From<QuestionNumber> for u32 {
	fn from(value: QuestionNumber) -> Self {
		value.0
	}
}

impl fmt::Display for QuestionNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
	Int(u32),
	Text(String),
	Other(serde_json::Value),
}

impl TryFrom<RawNumber> for QuestionNumber {
	type Error = ReadgenError;

	fn try_from(value: RawNumber) -> Result<Self, Self::Error> {
		match value {
			RawNumber::Int(n) => Ok(Self(n)),
			RawNumber::Text(text) => {
				let parsed = text.trim().parse::<u32>();
				parsed
					.map(Self)
					.map_err(|_| ReadgenError::InvalidQuestionNumber(text))
			}
			RawNumber::Other(other) => Err(ReadgenError::InvalidQuestionNumber(other.to_string())),
		}
	}
}

/// Reads a present field as `Some`, including an explicit `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	serde_json::Value::deserialize(deserializer).map(Some)
}

/// Parse test data from a string in the given format (`json`, `yaml`, `yml`
/// or `toml`). The format is matched case-insensitively, so a file extension
/// can be passed straight through.
pub fn parse_test_data(content: &str, format: &str) -> ReadgenResult<TestData> {
	let format = format.trim().to_ascii_lowercase();
	let parse_error = |reason: String| {
		ReadgenError::DataParse {
			format: format.clone(),
			reason,
		}
	};

	match format.as_str() {
		"json" => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
		"yaml" | "yml" => serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string())),
		"toml" => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
		_ => Err(ReadgenError::UnsupportedDataFormat(format.clone())),
	}
}
