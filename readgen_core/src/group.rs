use std::fmt;
use std::str::FromStr;

use crate::ChoiceOption;
use crate::GroupData;
use crate::QuestionData;
use crate::QuestionRange;
use crate::ReadgenError;
use crate::ReadgenResult;

const TRUE_FALSE_CHOICES: [&str; 3] = ["TRUE", "FALSE", "NOT GIVEN"];
const YES_NO_CHOICES: [&str; 3] = ["YES", "NO", "NOT GIVEN"];
const DEFAULT_OPTIONS_TITLE: &str = "List of Options";
const DEFAULT_OPTIONS_LIST_STYLE: &str = "upper-alpha";
const DEFAULT_GROUP_ID: &str = "g";

/// The supported question types. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
	/// True / False / Not Given.
	Tfng,
	/// Yes / No / Not Given.
	Ynng,
	/// Multiple choice, single or multi-select.
	Mcq,
	MatchOptions,
	MatchHeadings,
	/// Summary with free-text blanks.
	SummaryCompletion,
	/// Summary with drop targets fed from a word bank.
	SummaryCompletionBox,
	SentenceCompletion,
	ShortAnswer,
}

impl QuestionType {
	pub const ALL: [Self; 9] = [
		Self::Tfng,
		Self::Ynng,
		Self::Mcq,
		Self::MatchOptions,
		Self::MatchHeadings,
		Self::SummaryCompletion,
		Self::SummaryCompletionBox,
		Self::SentenceCompletion,
		Self::ShortAnswer,
	];

	/// The canonical upper-case tag used in input data.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Tfng => "TFNG",
			Self::Ynng => "YNNG",
			Self::Mcq => "MCQ",
			Self::MatchOptions => "MATCH_OPTIONS",
			Self::MatchHeadings => "MATCH_HEADINGS",
			Self::SummaryCompletion => "SUMMARY_COMPLETION",
			Self::SummaryCompletionBox => "SUMMARY_COMPLETION_BOX",
			Self::SentenceCompletion => "SENTENCE_COMPLETION",
			Self::ShortAnswer => "SHORT_ANSWER",
		}
	}

	/// Case-insensitive lookup. Returns `None` for unknown tags.
	pub fn parse(raw: &str) -> Option<Self> {
		let upper = raw.trim().to_ascii_uppercase();
		Self::ALL.into_iter().find(|kind| kind.as_str() == upper)
	}
}

impl FromStr for QuestionType {
	type Err = ReadgenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| ReadgenError::UnsupportedQuestionType(s.to_string()))
	}
}

impl fmt::Display for QuestionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A question group resolved into its typed form, borrowing from the input.
#[derive(Debug, Clone)]
pub struct QuestionGroup<'a> {
	/// Explicit instructions from the input. When absent the renderer
	/// synthesizes default text for the type.
	pub instructions: Option<&'a str>,
	pub body: GroupBody<'a>,
}

/// One variant per supported type, each with the payload its renderer reads.
#[derive(Debug, Clone)]
pub enum GroupBody<'a> {
	TrueFalseNotGiven(StatementSet<'a>),
	YesNoNotGiven(StatementSet<'a>),
	MultipleChoice(ChoiceSet<'a>),
	MatchOptions(MatchingSet<'a>),
	MatchHeadings(MatchingSet<'a>),
	SummaryCompletion(SummarySet<'a>),
	SummaryCompletionBox(WordBankSummary<'a>),
	SentenceCompletion(GapSet<'a>),
	ShortAnswer(GapSet<'a>),
}

/// Statements answered with one of three fixed choices.
#[derive(Debug, Clone)]
pub struct StatementSet<'a> {
	pub questions: &'a [QuestionData],
	pub choices: Vec<&'a str>,
}

/// Multiple-choice questions, each carrying its own `{ label, text }` options.
#[derive(Debug, Clone)]
pub struct ChoiceSet<'a> {
	pub questions: &'a [QuestionData],
	/// `subtype: "multiple"` renders checkboxes instead of radios.
	pub multiple: bool,
}

/// Prompts matched against one shared candidate list.
#[derive(Debug, Clone)]
pub struct MatchingSet<'a> {
	pub questions: &'a [QuestionData],
	/// `None` when the group lists no options; the reference box is then
	/// omitted and each select offers only the blank entry.
	pub options: Option<&'a [ChoiceOption]>,
	pub options_title: &'a str,
	pub list_style: &'a str,
}

/// Summary paragraphs with inline `{{N}}` blanks.
#[derive(Debug, Clone)]
pub struct SummarySet<'a> {
	pub answers: &'a [QuestionData],
	pub paragraphs: &'a [String],
}

/// A summary whose blanks are drop targets for a word bank.
#[derive(Debug, Clone)]
pub struct WordBankSummary<'a> {
	pub summary: SummarySet<'a>,
	pub word_bank: &'a [String],
	/// Drag-group name shared by the bank entries and the drop targets.
	pub drag_group: String,
}

/// Free-text answers, optionally flanked by sentence fragments.
#[derive(Debug, Clone)]
pub struct GapSet<'a> {
	pub questions: &'a [QuestionData],
}

impl<'a> QuestionGroup<'a> {
	/// Resolve the raw `type` tag and pick out the payload for that type.
	///
	/// Fails with [`ReadgenError::UnsupportedQuestionType`] carrying the raw tag
	/// when the type is not one of [`QuestionType::ALL`].
	pub fn from_data(group: &'a GroupData) -> ReadgenResult<Self> {
		let kind: QuestionType = group.kind.parse()?;
		let questions = group.questions();

		let body = match kind {
			QuestionType::Tfng => GroupBody::TrueFalseNotGiven(statement_set(group, &TRUE_FALSE_CHOICES)),
			QuestionType::Ynng => GroupBody::YesNoNotGiven(statement_set(group, &YES_NO_CHOICES)),
			QuestionType::Mcq => {
				GroupBody::MultipleChoice(ChoiceSet {
					questions,
					multiple: group.subtype.as_deref() == Some("multiple"),
				})
			}
			QuestionType::MatchOptions => GroupBody::MatchOptions(matching_set(group)),
			QuestionType::MatchHeadings => GroupBody::MatchHeadings(matching_set(group)),
			QuestionType::SummaryCompletion => GroupBody::SummaryCompletion(summary_set(group)),
			QuestionType::SummaryCompletionBox => {
				GroupBody::SummaryCompletionBox(WordBankSummary {
					summary: summary_set(group),
					word_bank: &group.word_bank,
					drag_group: drag_group_name(group),
				})
			}
			QuestionType::SentenceCompletion => GroupBody::SentenceCompletion(GapSet { questions }),
			QuestionType::ShortAnswer => GroupBody::ShortAnswer(GapSet { questions }),
		};

		Ok(Self {
			instructions: group.instructions.as_deref(),
			body,
		})
	}

	pub fn question_type(&self) -> QuestionType {
		self.body.question_type()
	}

	/// The range this group displays, derived from its own numbers.
	pub fn range(&self) -> QuestionRange {
		let entries = match &self.body {
			GroupBody::TrueFalseNotGiven(set) | GroupBody::YesNoNotGiven(set) => set.questions,
			GroupBody::MultipleChoice(set) => set.questions,
			GroupBody::MatchOptions(set) | GroupBody::MatchHeadings(set) => set.questions,
			GroupBody::SummaryCompletion(set) => set.answers,
			GroupBody::SummaryCompletionBox(set) => set.summary.answers,
			GroupBody::SentenceCompletion(set) | GroupBody::ShortAnswer(set) => set.questions,
		};
		QuestionRange::from_numbers(entries.iter().filter_map(|q| q.number.map(u32::from)))
	}

	/// Whether the group asks for several answers per question.
	pub fn is_multiple(&self) -> bool {
		matches!(&self.body, GroupBody::MultipleChoice(set) if set.multiple)
	}
}

impl GroupBody<'_> {
	pub fn question_type(&self) -> QuestionType {
		match self {
			Self::TrueFalseNotGiven(_) => QuestionType::Tfng,
			Self::YesNoNotGiven(_) => QuestionType::Ynng,
			Self::MultipleChoice(_) => QuestionType::Mcq,
			Self::MatchOptions(_) => QuestionType::MatchOptions,
			Self::MatchHeadings(_) => QuestionType::MatchHeadings,
			Self::SummaryCompletion(_) => QuestionType::SummaryCompletion,
			Self::SummaryCompletionBox(_) => QuestionType::SummaryCompletionBox,
			Self::SentenceCompletion(_) => QuestionType::SentenceCompletion,
			Self::ShortAnswer(_) => QuestionType::ShortAnswer,
		}
	}
}

fn statement_set<'a>(group: &'a GroupData, defaults: &'static [&'static str]) -> StatementSet<'a> {
	let choices: Vec<&'a str> = match &group.options {
		Some(options) => options.iter().map(ChoiceOption::label).collect(),
		None => defaults.to_vec(),
	};

	StatementSet {
		questions: group.questions(),
		choices,
	}
}

fn matching_set(group: &GroupData) -> MatchingSet<'_> {
	MatchingSet {
		questions: group.questions(),
		options: group.options.as_deref(),
		options_title: group.options_title.as_deref().unwrap_or(DEFAULT_OPTIONS_TITLE),
		list_style: group
			.options_list_style
			.as_deref()
			.unwrap_or(DEFAULT_OPTIONS_LIST_STYLE),
	}
}

fn summary_set(group: &GroupData) -> SummarySet<'_> {
	SummarySet {
		answers: group.answers(),
		paragraphs: &group.paragraphs,
	}
}

/// `dnd_group` when given, otherwise `summary-<group_id>` with `g` as the
/// fallback id.
pub fn drag_group_name(group: &GroupData) -> String {
	match &group.dnd_group {
		Some(name) if !name.is_empty() => name.clone(),
		_ => {
			let id = group
				.group_id
				.as_deref()
				.filter(|id| !id.is_empty())
				.unwrap_or(DEFAULT_GROUP_ID);
			format!("summary-{id}")
		}
	}
}
