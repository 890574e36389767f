mod common;

use readgen_core::AnyEmptyResult;
use readgen_core::DEFAULT_TEMPLATE;
use readgen_core::ReadgenConfig;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::readgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created readgen.toml"))
		.stdout(predicates::str::contains("Created template file"));

	let template = std::fs::read_to_string(tmp.path().join("template/base-reading.html"))?;
	assert_eq!(template, DEFAULT_TEMPLATE);

	let config = ReadgenConfig::load(tmp.path())?.ok_or("config should be discovered")?;
	assert_eq!(
		config.template.as_deref(),
		Some(std::path::Path::new("template/base-reading.html"))
	);
	assert_eq!(config.output_dir(), std::path::Path::new("dist"));

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "readgen.toml", "output_dir = \"site\"\n")?;
	common::write_file(tmp.path(), "template/base-reading.html", "existing template")?;

	common::readgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("readgen.toml"))?,
		"output_dir = \"site\"\n"
	);
	assert_eq!(
		std::fs::read_to_string(tmp.path().join("template/base-reading.html"))?,
		"existing template"
	);

	Ok(())
}

#[test]
fn init_then_build_uses_the_created_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "test.json", common::SAMPLE_JSON)?;

	common::readgen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::readgen_cmd()
		.arg("build")
		.arg("test.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let html = std::fs::read_to_string(tmp.path().join("dist/harbour-test.html"))?;
	assert!(html.contains("window.testMeta"));

	Ok(())
}
