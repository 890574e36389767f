use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use readgen_cli::Commands;
use readgen_cli::OutputFormat;
use readgen_cli::ReadgenCli;
use readgen_core::DEFAULT_TEMPLATE;
use readgen_core::PartData;
use readgen_core::ReadgenConfig;
use readgen_core::ReadgenError;
use readgen_core::RenderOutput;
use readgen_core::TestData;
use readgen_core::TestMeta;
use readgen_core::build_meta;
use readgen_core::parse_test_data;
use readgen_core::render_with_options;
use readgen_core::validate;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

/// File name stem used when the test has no `test_id`.
const FALLBACK_OUTPUT_STEM: &str = "reading-output";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ReadgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Build {
			input,
			output,
			template,
			check,
			watch,
		}) => {
			let request = BuildRequest {
				input: input.clone(),
				output: output.clone(),
				template: template.clone(),
			};
			run_build(&args, &request, *check, *watch)
		}
		Some(Commands::Check { input, format }) => run_check(&args, input, *format),
		None => {
			eprintln!("No subcommand specified. Run `readgen --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<ReadgenError>() {
			Ok(readgen_err) => {
				let report: miette::Report = (*readgen_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` shows the
/// pipeline's debug events and the default shows warnings only.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose {
		"warn,readgen_core=debug"
	} else {
		"warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &ReadgenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve `path` against the project root unless it is absolute.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
	if path.is_absolute() {
		path.to_path_buf()
	} else {
		root.join(path)
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

fn load_config(root: &Path) -> Result<ReadgenConfig, Box<dyn std::error::Error>> {
	Ok(ReadgenConfig::load(root)?.unwrap_or_default())
}

/// Read and parse a test data file, choosing the format from its extension.
fn load_test(path: &Path) -> Result<TestData, Box<dyn std::error::Error>> {
	let content = std::fs::read_to_string(path)
		.map_err(|e| format!("failed to read `{}`: {e}", path.display()))?;
	let format = path
		.extension()
		.and_then(|ext| ext.to_str())
		.unwrap_or("json");

	Ok(parse_test_data(&content, format)?)
}

fn run_init(args: &ReadgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("readgen.toml");
	let template_path = root.join("template").join("base-reading.html");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
	} else {
		let sample_config = "# readgen configuration\n\n# HTML template with the section \
		                     markers. Omit to use the bundled template.\ntemplate = \
		                     \"template/base-reading.html\"\n\n# Directory for generated pages \
		                     when no output path is given.\noutput_dir = \"dist\"\n\n[footer]\n# \
		                     \"defined\": one button per question in the part.\n# \"dense\": one \
		                     button per number between the part's first and last \
		                     question.\nnumbering = \"defined\"\n";

		std::fs::write(&config_path, sample_config)?;
		println!("Created readgen.toml");
	}

	if template_path.exists() {
		println!("Template file already exists: {}", template_path.display());
	} else {
		if let Some(parent) = template_path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&template_path, DEFAULT_TEMPLATE)?;
		println!("Created template file: {}", template_path.display());
	}

	Ok(())
}

struct BuildRequest {
	input: PathBuf,
	output: Option<PathBuf>,
	template: Option<PathBuf>,
}

/// Paths and content for one build, resolved against the project root.
struct BuildPlan {
	output_path: PathBuf,
	template_path: Option<PathBuf>,
	rendered: RenderOutput,
}

fn run_build(
	args: &ReadgenCli,
	request: &BuildRequest,
	check: bool,
	watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let plan = plan_build(args, request)?;

	if check {
		if !check_output(args, &plan)? {
			process::exit(1);
		}
		return Ok(());
	}

	write_output(args, &plan)?;

	if !watch {
		return Ok(());
	}

	// Watch mode
	println!("\nWatching for file changes... (press Ctrl+C to stop)");

	let root = resolve_root(args);
	let mut watched = vec![resolve_path(&root, &request.input)];
	watched.extend(plan.template_path.clone());
	let (tx, rx) = mpsc::channel();

	let mut watcher =
		notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
			if let Ok(event) = res {
				if matches!(
					event.kind,
					notify::EventKind::Modify(_) | notify::EventKind::Create(_)
				) {
					let _ = tx.send(());
				}
			}
		})?;

	use notify::Watcher;
	for path in &watched {
		watcher.watch(path, notify::RecursiveMode::NonRecursive)?;
	}

	loop {
		rx.recv()?;
		// Debounce: drain additional events within 200ms.
		while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}

		println!("\nFile change detected, rebuilding...");
		if let Err(e) = plan_build(args, request).and_then(|plan| write_output(args, &plan)) {
			eprintln!("{} {e}", colored!("error:", red));
		}
	}
}

fn plan_build(
	args: &ReadgenCli,
	request: &BuildRequest,
) -> Result<BuildPlan, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let test = load_test(&resolve_path(&root, &request.input))?;

	let template_path = request
		.template
		.as_deref()
		.or(config.template.as_deref())
		.map(|path| resolve_path(&root, path));
	let template = match &template_path {
		Some(path) => {
			std::fs::read_to_string(path)
				.map_err(|e| format!("failed to read template `{}`: {e}", path.display()))?
		}
		None => DEFAULT_TEMPLATE.to_string(),
	};

	tracing::debug!(
		root = %root.display(),
		template = ?template_path,
		"resolved build inputs"
	);
	let rendered = render_with_options(&test, &template, &config.render_options())?;

	let output_path = match &request.output {
		Some(path) => resolve_path(&root, path),
		None => {
			let stem = test.test_id.as_deref().unwrap_or(FALLBACK_OUTPUT_STEM);
			resolve_path(&root, config.output_dir()).join(format!("{stem}.html"))
		}
	};

	if args.verbose {
		let source = template_path
			.as_deref()
			.map_or_else(|| "bundled".to_string(), |path| make_relative(path, &root));
		println!("Template: {source}");
	}

	Ok(BuildPlan {
		output_path,
		template_path,
		rendered,
	})
}

fn write_output(args: &ReadgenCli, plan: &BuildPlan) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	if let Some(parent) = plan.output_path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(&plan.output_path, &plan.rendered.html)?;

	println!(
		"Generated {}",
		colored!(make_relative(&plan.output_path, &root), green)
	);
	println!("Total questions: {}", plan.rendered.meta.total_questions);

	if args.verbose {
		for part in &plan.rendered.meta.parts {
			println!("  Part {}: questions {}-{}", part.part, part.start, part.end);
		}
	}

	Ok(())
}

/// Compare the existing output file with a fresh render. Returns `true` when
/// they match.
fn check_output(args: &ReadgenCli, plan: &BuildPlan) -> Result<bool, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let rel = make_relative(&plan.output_path, &root);

	let Ok(current) = std::fs::read_to_string(&plan.output_path) else {
		eprintln!("{} {rel} does not exist", colored!("error:", red));
		return Ok(false);
	};

	if current == plan.rendered.html {
		println!("Check passed: {rel} is up to date.");
		return Ok(true);
	}

	eprintln!("{} {rel} is out of date", colored!("error:", red));
	print_diff(&current, &plan.rendered.html);
	eprintln!(
		"\n{} run `readgen build` to regenerate it",
		colored!("hint:", yellow)
	);

	Ok(false)
}

fn run_check(
	args: &ReadgenCli,
	input: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let test = load_test(&resolve_path(&root, input))?;

	let errors = validate(&test);
	if !errors.is_empty() {
		return Err(ReadgenError::InvalidTestData(errors).into());
	}

	let meta = build_meta(&test);

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&meta)?);
		}
		OutputFormat::Text => {
			let title = test.test_id.as_deref().unwrap_or(FALLBACK_OUTPUT_STEM);
			println!("{}", colored!(title, bold));
			for part in &meta.parts {
				println!(
					"  Part {:<4} questions {}-{} ({} numbered)",
					part.part,
					part.start,
					part.end,
					part.span()
				);
			}
			println!("Total questions: {}", meta.total_questions);
			println!("Answer key: {} answer(s)", meta.correct_answers.len());

			let missing = missing_answers(&test, &meta);
			if !missing.is_empty() {
				let list = missing
					.iter()
					.map(ToString::to_string)
					.collect::<Vec<_>>()
					.join(", ");
				println!(
					"{} no answer for question(s) {list}",
					colored!("warning:", yellow)
				);
			}
			println!("Check passed: test data is valid.");
		}
	}

	Ok(())
}

/// Question numbers that appear in the test but have no answer.
fn missing_answers(test: &TestData, meta: &TestMeta) -> Vec<u32> {
	let mut missing: Vec<u32> = test
		.parts
		.iter()
		.flat_map(PartData::question_numbers)
		.filter(|number| !meta.correct_answers.contains_key(number))
		.collect();
	missing.sort_unstable();
	missing
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
