use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate interactive reading-test pages from structured test data.",
	long_about = "readgen turns a reading-comprehension test described in JSON, YAML or TOML \
	              (parts, passages, question groups and answers) into a self-contained \
	              interactive HTML page.\n\nQuick start:\n  readgen init                 Create \
	              readgen.toml and a starter template\n  readgen check test.json      Validate \
	              the test and print its question ranges\n  readgen build test.json      Write \
	              dist/<test_id>.html"
)]
pub struct ReadgenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. Config, relative inputs and the
	/// default output directory are resolved against it.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `readgen.toml` and `template/base-reading.html`.
	///
	/// Existing files are left untouched.
	Init,
	/// Render a test into an HTML page.
	///
	/// Reads the test data (format chosen by file extension), validates it,
	/// and writes the page to OUTPUT or to `<output_dir>/<test_id>.html`.
	/// The template comes from `--template`, then `readgen.toml`, then the
	/// bundled default.
	Build {
		/// Test data file (`.json`, `.yaml`, `.yml` or `.toml`).
		input: PathBuf,

		/// Where to write the page. Defaults to `<output_dir>/<test_id>.html`.
		output: Option<PathBuf>,

		/// HTML template containing the section markers.
		#[arg(long, short)]
		template: Option<PathBuf>,

		/// Do not write anything. Exit with a non-zero status when the output
		/// file is missing or differs from what would be generated.
		#[arg(long, default_value_t = false)]
		check: bool,

		/// Rebuild whenever the input or template changes.
		#[arg(long, default_value_t = false)]
		watch: bool,
	},
	/// Validate a test and print its derived metadata.
	///
	/// Exits with a non-zero status when the test is invalid.
	Check {
		/// Test data file (`.json`, `.yaml`, `.yml` or `.toml`).
		input: PathBuf,

		/// Output format for the metadata.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable summary of parts and question ranges.
	Text,
	/// The metadata object embedded in generated pages, as JSON.
	Json,
}
