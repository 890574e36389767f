mod common;

use readgen_core::AnyEmptyResult;
use serde_json::Value;

#[test]
fn check_prints_part_ranges() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("check")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("harbour-test"))
		.stdout(predicates::str::contains("questions 1-2"))
		.stdout(predicates::str::contains("questions 3-3"))
		.stdout(predicates::str::contains("Total questions: 3"))
		.stdout(predicates::str::contains("Answer key: 3 answer(s)"))
		.stdout(predicates::str::contains("Check passed"));

	Ok(())
}

#[test]
fn check_warns_about_unanswered_questions() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let data = common::SAMPLE_JSON.replace(r#", "answer": "trade""#, "");
	common::write_file(tmp.path(), "test.json", &data)?;

	common::readgen_cmd()
		.arg("check")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Answer key: 2 answer(s)"))
		.stdout(predicates::str::contains("no answer for question(s) 3"));

	Ok(())
}

#[test]
fn check_json_prints_meta() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	let output = common::readgen_cmd()
		.arg("check")
		.arg("test.json")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert!(output.status.success());

	let meta: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(meta["totalQuestions"], 3);
	assert_eq!(meta["parts"][0]["part"], 1);
	assert_eq!(meta["parts"][0]["start"], 1);
	assert_eq!(meta["parts"][0]["end"], 2);
	assert_eq!(meta["parts"][1]["start"], 3);
	assert_eq!(meta["correctAnswers"]["1"], "FALSE");
	assert_eq!(meta["correctAnswers"]["3"], "trade");

	Ok(())
}

#[test]
fn check_reports_every_violation() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let data = common::SAMPLE_JSON
		.replace(r#""number": 3"#, r#""number": 1"#)
		.replace("SHORT_ANSWER", "ESSAY");
	common::write_file(tmp.path(), "test.json", &data)?;

	common::readgen_cmd()
		.arg("check")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("unsupported question type: ESSAY"))
		.stderr(predicates::str::contains("duplicate question number 1"));

	Ok(())
}

#[test]
fn check_rejects_unknown_data_format() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.csv", "part,number\n1,1\n")?;

	common::readgen_cmd()
		.arg("check")
		.arg("test.csv")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("csv"));

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() {
	common::readgen_cmd()
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("readgen --help"));
}
