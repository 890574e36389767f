mod common;

use predicates::prelude::PredicateBooleanExt;
use readgen_core::AnyEmptyResult;

#[test]
fn build_writes_output_named_after_test_id() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Generated"))
		.stdout(predicates::str::contains("harbour-test.html"))
		.stdout(predicates::str::contains("Total questions: 3"));

	let html = std::fs::read_to_string(tmp.path().join("dist/harbour-test.html"))?;
	assert!(html.contains(r#"name="q1""#));
	assert!(html.contains(r#"id="q3""#));
	assert!(html.contains(r#""totalQuestions":3"#));
	assert!(!html.contains("<!-- TEST_META_SCRIPT -->"));

	Ok(())
}

#[test]
fn build_without_test_id_uses_fallback_name() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let data = common::SAMPLE_JSON.replace(r#""test_id": "harbour-test","#, "");
	common::write_file(tmp.path(), "test.json", &data)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("dist/reading-output.html").exists());

	Ok(())
}

#[test]
fn build_respects_explicit_output_and_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;
	common::write_file(
		tmp.path(),
		"custom.html",
		"<main><!-- QUESTIONS_START --><!-- QUESTIONS_END --></main>\n<!-- TEST_META_SCRIPT -->\n",
	)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("out/page.html")
		.arg("--template")
		.arg("custom.html")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("out/page.html"))?;
	assert!(html.starts_with("<main><!-- QUESTIONS_START -->\n"));
	assert!(html.contains("window.testMeta"));
	assert!(!html.contains("PASSAGES_START"));

	Ok(())
}

#[test]
fn build_reads_template_and_output_dir_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;
	common::write_file(
		tmp.path(),
		".config/readgen.toml",
		"template = \"pages/base.html\"\noutput_dir = \"site\"\n",
	)?;
	common::write_file(
		tmp.path(),
		"pages/base.html",
		"<nav><!-- FOOTER_NAV_START --><!-- FOOTER_NAV_END --></nav>\n",
	)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("site/harbour-test.html"))?;
	assert!(html.starts_with("<nav><!-- FOOTER_NAV_START -->"));
	assert!(html.contains("goToQuestion(3)"));

	Ok(())
}

#[test]
fn build_accepts_yaml_input() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(
		tmp.path(),
		"test.yaml",
		"test_id: yaml-test\nparts:\n  - part: 1\n    question_groups:\n      - type: \
		 short_answer\n        questions:\n          - number: \"1\"\n            answer: \
		 river\n",
	)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.yaml")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Total questions: 1"));

	assert!(tmp.path().join("dist/yaml-test.html").exists());

	Ok(())
}

#[test]
fn build_fails_on_duplicate_question_numbers() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let data = common::SAMPLE_JSON.replace(r#""number": 3"#, r#""number": 2"#);
	common::write_file(tmp.path(), "test.json", &data)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("duplicate question number 2"));

	assert!(!tmp.path().join("dist").exists());

	Ok(())
}

#[test]
fn build_fails_on_unsupported_question_type() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let data = common::SAMPLE_JSON.replace("SHORT_ANSWER", "ESSAY");
	common::write_file(tmp.path(), "test.json", &data)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("unsupported question type: ESSAY"));

	Ok(())
}

#[test]
fn build_fails_on_missing_input() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::readgen_cmd()
		.arg("build")
		.arg("missing.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("missing.json"));

	Ok(())
}

#[test]
fn build_check_reports_missing_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("does not exist"));

	assert!(!tmp.path().join("dist/harbour-test.html").exists());

	Ok(())
}

#[test]
fn build_check_passes_after_build() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn build_check_fails_when_output_is_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let changed = common::SAMPLE_JSON.replace("Trade grew.", "Trade collapsed.");
	common::write_file(tmp.path(), "test.json", &changed)?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("out of date"))
		.stderr(predicates::str::contains("+").and(predicates::str::contains("Trade collapsed.")));

	// The stale file is left as it was.
	let html = std::fs::read_to_string(tmp.path().join("dist/harbour-test.html"))?;
	assert!(html.contains("Trade grew."));

	Ok(())
}

#[test]
fn build_warns_when_template_lacks_markers() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;
	common::write_file(tmp.path(), "bare.html", "<html></html>\n")?;

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--template")
		.arg("bare.html")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("PASSAGES"));

	let html = std::fs::read_to_string(tmp.path().join("dist/harbour-test.html"))?;
	assert_eq!(html, "<html></html>\n");

	Ok(())
}
