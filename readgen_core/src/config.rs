use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::FooterNumbering;
use crate::ReadgenError;
use crate::ReadgenResult;
use crate::RenderOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["readgen.toml", ".readgen.toml", ".config/readgen.toml"];

/// Directory used for generated pages when the config does not name one.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Configuration loaded from a `readgen.toml` file.
///
/// ```toml
/// template = "template/base-reading.html"
/// output_dir = "dist"
///
/// [footer]
/// numbering = "defined"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ReadgenConfig {
	/// Path to the HTML template, relative to the project root. When absent
	/// the bundled template is used.
	#[serde(default)]
	pub template: Option<PathBuf>,
	/// Directory for generated pages, relative to the project root.
	#[serde(default)]
	pub output_dir: Option<PathBuf>,
	#[serde(default)]
	pub footer: FooterConfig,
}

/// Footer navigation settings.
///
/// - `"defined"` (default): one button per question the part defines.
/// - `"dense"`: one button per integer from the part's first to last question.
#[derive(Debug, Default, Deserialize)]
pub struct FooterConfig {
	#[serde(default)]
	pub numbering: FooterNumbering,
}

impl ReadgenConfig {
	/// Returns the first config file that exists under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from `root`, or `None` when no config file exists.
	pub fn load(root: &Path) -> ReadgenResult<Option<ReadgenConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> ReadgenResult<ReadgenConfig> {
		toml::from_str(content).map_err(|e| ReadgenError::ConfigParse(e.to_string()))
	}

	/// The output directory, falling back to [`DEFAULT_OUTPUT_DIR`].
	pub fn output_dir(&self) -> &Path {
		self.output_dir
			.as_deref()
			.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR))
	}

	pub fn render_options(&self) -> RenderOptions {
		RenderOptions {
			footer_numbering: self.footer.numbering,
		}
	}
}
