#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn readgen_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("readgen"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// A two-part test with questions 1-3, written as JSON.
pub const SAMPLE_JSON: &str = r#"{
  "test_id": "harbour-test",
  "parts": [
    {
      "part": 1,
      "passage": { "title": "Harbours", "paragraphs": ["Ships came and went."] },
      "question_groups": [
        {
          "type": "TFNG",
          "questions": [
            { "number": 1, "statement": "Ships never came.", "answer": "FALSE" },
            { "number": 2, "statement": "The harbour was busy.", "answer": "TRUE" }
          ]
        }
      ]
    },
    {
      "part": 2,
      "passage": { "paragraphs": ["Trade grew."] },
      "question_groups": [
        {
          "type": "SHORT_ANSWER",
          "questions": [{ "number": 3, "prompt": "What grew?", "answer": "trade" }]
        }
      ]
    }
  ]
}
"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> std::io::Result<()> {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}
