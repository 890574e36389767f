use serde::Deserialize;
use serde::Serialize;

use crate::PartData;
use crate::PartMeta;
use crate::ReadgenError;
use crate::ReadgenResult;
use crate::Section;
use crate::TestData;
use crate::TestMeta;
use crate::build_meta;
use crate::inject_meta_script;
use crate::render_question_group;
use crate::replace_section;
use crate::validate;

/// How the footer numbers the questions of each part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterNumbering {
	/// One control per question number the part defines.
	#[default]
	Defined,
	/// One control per integer between the part's first and last question,
	/// whether or not each number exists.
	Dense,
}

/// Options for a render. The defaults match a test with no configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
	pub footer_numbering: FooterNumbering,
}

/// The finished page and the metadata embedded in it.
#[derive(Debug, Clone)]
pub struct RenderOutput {
	pub html: String,
	pub meta: TestMeta,
}

/// Render a test into the template with default options.
///
/// Validation failures abort with [`ReadgenError::InvalidTestData`] listing
/// every violation; a group whose type has no renderer aborts with
/// [`ReadgenError::UnsupportedQuestionType`]. Nothing is returned on failure.
pub fn render_from_json(test: &TestData, template: &str) -> ReadgenResult<RenderOutput> {
	render_with_options(test, template, &RenderOptions::default())
}

/// Render a test into the template.
pub fn render_with_options(
	test: &TestData,
	template: &str,
	options: &RenderOptions,
) -> ReadgenResult<RenderOutput> {
	let errors = validate(test);
	if !errors.is_empty() {
		return Err(ReadgenError::InvalidTestData(errors));
	}
	tracing::debug!(parts = test.parts.len(), "test data validated");

	let meta = build_meta(test);
	tracing::debug!(
		total_questions = meta.total_questions,
		answers = meta.correct_answers.len(),
		"metadata built"
	);

	let fragments = [
		(Section::PartHeaders, render_part_headers(&test.parts, &meta.parts)),
		(Section::Passages, render_passages(&test.parts)),
		(Section::Questions, render_questions(&test.parts)?),
		(
			Section::FooterNav,
			render_footer_nav(&test.parts, &meta.parts, options.footer_numbering),
		),
	];
	tracing::debug!(
		bytes = fragments.iter().map(|(_, content)| content.len()).sum::<usize>(),
		"fragments rendered"
	);

	let mut html = template.to_string();
	for (section, content) in fragments {
		match replace_section(&html, section.key(), &content) {
			Some(replaced) => html = replaced,
			None => {
				tracing::warn!(section = section.key(), "template is missing the section markers");
			}
		}
	}

	match inject_meta_script(&html, &meta)? {
		Some(replaced) => html = replaced,
		None => tracing::warn!("template is missing the metadata placeholder"),
	}

	Ok(RenderOutput { html, meta })
}

/// One header per part in identifier order. Only the first is visible.
///
/// Headers follow the sorted metadata while passages and question sets follow
/// input order, so out-of-order input shows the lowest part id's header above
/// the first listed passage.
pub fn render_part_headers(parts: &[PartData], parts_meta: &[PartMeta]) -> String {
	let first = parts_meta.first().map(|meta| meta.part);

	parts_meta
		.iter()
		.map(|meta| {
			let part = parts.iter().find(|part| part.id() == Some(meta.part));
			let title = part
				.and_then(|part| part.name.clone())
				.unwrap_or_else(|| format!("Part {}", meta.part));
			let instruction = part
				.and_then(|part| part.instructions.clone())
				.unwrap_or_else(|| {
					format!("Read the text and answer questions {}-{}.", meta.start, meta.end)
				});

			format!(
				"<div id=\"part-header-{id}\" class=\"part-header{hidden}\">
                    <p><strong>{title}</strong></p>
                    <p>{instruction}</p>
                </div>",
				id = meta.part,
				hidden = hidden_class(Some(meta.part) == first),
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// One passage per part in input order. Only the first is visible.
pub fn render_passages(parts: &[PartData]) -> String {
	let first = parts.first().and_then(PartData::id);

	parts
		.iter()
		.map(|part| {
			let id = part.id().unwrap_or_default();
			let passage = part.passage.as_ref();
			let title = passage
				.and_then(|passage| passage.title.clone())
				.unwrap_or_else(|| format!("Passage {id}"));
			let paragraphs = passage
				.map(|passage| passage.paragraphs.as_slice())
				.unwrap_or_default()
				.iter()
				.map(|paragraph| format!("                    <p>{paragraph}</p>"))
				.collect::<Vec<_>>()
				.join("\n");

			format!(
				"<div id=\"passage-text-{id}\" class=\"reading-passage{hidden}\">
                    <h4 class=\"text-center\">{title}</h4>
{paragraphs}
                </div>",
				hidden = hidden_class(part.id() == first),
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// One question set per part in input order, holding every group in input
/// order. Only the first set is visible.
pub fn render_questions(parts: &[PartData]) -> ReadgenResult<String> {
	let first = parts.first().and_then(PartData::id);
	let mut sets = Vec::with_capacity(parts.len());

	for part in parts {
		let id = part.id().unwrap_or_default();
		let groups = part
			.question_groups
			.iter()
			.map(|group| render_question_group(group, id))
			.collect::<ReadgenResult<Vec<_>>>()?
			.join("\n");

		sets.push(format!(
			"<div id=\"questions-{id}\" class=\"question-set{hidden}\">
                    <div class=\"questions-container\">
{groups}
                    </div>
                </div>",
			hidden = hidden_class(part.id() == first),
		));
	}

	Ok(sets.join("\n"))
}

/// The navigation strip: one segment per part with an attempted counter and
/// one button per question, followed by the check-answers button. The first
/// part's segment is selected.
pub fn render_footer_nav(
	parts: &[PartData],
	parts_meta: &[PartMeta],
	numbering: FooterNumbering,
) -> String {
	let first = parts_meta.first().map(|meta| meta.part);

	let segments = parts_meta
		.iter()
		.map(|meta| {
			let numbers = footer_numbers(parts, meta, numbering);
			let buttons = numbers
				.iter()
				.map(|number| {
					format!(
						"<button class=\"subQuestion scorable-item\" \
						 onclick=\"goToQuestion({number})\"><span class=\"sr-only\">Question \
						 {number}</span><span aria-hidden=\"true\">{number}</span></button>"
					)
				})
				.collect::<Vec<_>>()
				.join("\n");
			let selected = if Some(meta.part) == first { " selected" } else { "" };

			format!(
				"<div class=\"footer__questionWrapper___1tZ46 multiple{selected}\" role=\"tablist\">
            <button role=\"tab\" class=\"footer__questionNo___3WNct\" onclick=\"switchToPart({part})\">
                <span>
                    <span aria-hidden=\"true\" class=\"section-prefix\">Part </span>
                    <span class=\"sectionNr\" aria-hidden=\"true\">{part}</span>
                    <span class=\"attemptedCount\" aria-hidden=\"true\">0 of {count}</span>
                </span>
            </button>
            <div class=\"footer__subquestionWrapper___9GgoP\">
{buttons}
            </div>
        </div>",
				part = meta.part,
				count = numbers.len(),
			)
		})
		.collect::<Vec<_>>()
		.join("\n        ");

	format!(
		"<nav class=\"nav-row perScorableItem\" aria-label=\"Questions\">
{segments}
        <button id=\"deliver-button\" aria-label=\"Review your answers\" class=\"footer__deliverButton___3FM07\">
            <i class=\"fa fa fa-check\" aria-hidden=\"true\"></i>
            <span>Check Answers</span>
        </button>
    </nav>"
	)
}

fn footer_numbers(parts: &[PartData], meta: &PartMeta, numbering: FooterNumbering) -> Vec<u32> {
	match numbering {
		FooterNumbering::Dense => (meta.start..=meta.end).collect(),
		FooterNumbering::Defined => {
			let mut numbers: Vec<u32> = parts
				.iter()
				.filter(|part| part.id() == Some(meta.part))
				.flat_map(PartData::question_numbers)
				.collect();
			numbers.sort_unstable();
			numbers.dedup();
			numbers
		}
	}
}

fn hidden_class(visible: bool) -> &'static str {
	if visible { "" } else { " hidden" }
}
