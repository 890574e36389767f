use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ReadgenError {
	#[error(transparent)]
	#[diagnostic(code(readgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse {format} test data: {reason}")]
	#[diagnostic(
		code(readgen::data_parse),
		help("the input must contain a `parts` list of parts with `question_groups`")
	)]
	DataParse { format: String, reason: String },

	#[error("unsupported data file format: `{0}`")]
	#[diagnostic(
		code(readgen::unsupported_format),
		help("supported formats: json, yaml, yml, toml")
	)]
	UnsupportedDataFormat(String),

	#[error("invalid test data: {}", .0.join("; "))]
	#[diagnostic(
		code(readgen::invalid_test_data),
		help("fix the listed problems in the input file; nothing was rendered")
	)]
	InvalidTestData(Vec<String>),

	#[error("unsupported question type: {0}")]
	#[diagnostic(
		code(readgen::unsupported_question_type),
		help(
			"supported types: TFNG, YNNG, MCQ, MATCH_OPTIONS, MATCH_HEADINGS, \
			 SUMMARY_COMPLETION, SUMMARY_COMPLETION_BOX, SENTENCE_COMPLETION, SHORT_ANSWER"
		)
	)]
	UnsupportedQuestionType(String),

	#[error("invalid question number: `{0}`")]
	#[diagnostic(
		code(readgen::invalid_question_number),
		help("question numbers must be positive integers or strings holding one")
	)]
	InvalidQuestionNumber(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(readgen::config_parse),
		help("check that readgen.toml is valid TOML with `template`, `output_dir` and `[footer]`")
	)]
	ConfigParse(String),

	#[error("failed to serialize test metadata: {0}")]
	#[diagnostic(code(readgen::meta_serialize))]
	MetaSerialize(String),
}

pub type ReadgenResult<T> = Result<T, ReadgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
