//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use hdrdoc::core_api::DEFAULT_TITLE;
use hdrdoc::version::DEFAULT_VERSION_TOKEN;
use hdrdoc::{Document, Hdrdoc, Query, RenderFormat, Sections};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
/// Output formats the CLI can emit.
enum OutputFormat {
	/// Standalone HTML page (default).
	Html,
	/// Markdown document.
	#[value(alias = "md")]
	Markdown,
	/// JSON dump of the extracted declarations.
	Json,
}

impl From<OutputFormat> for RenderFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Html => RenderFormat::Html,
			OutputFormat::Markdown => RenderFormat::Markdown,
			OutputFormat::Json => RenderFormat::Json,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Declaration collections accepted by `--sections`.
enum SectionSpec {
	/// Enumerations.
	Enums,
	/// Structs, unions and function pointers.
	Types,
	/// Extern variables.
	Globals,
	/// Extern functions.
	Functions,
}

impl From<SectionSpec> for Sections {
	fn from(spec: SectionSpec) -> Self {
		match spec {
			SectionSpec::Enums => Self::ENUMS,
			SectionSpec::Types => Self::TYPES,
			SectionSpec::Globals => Self::GLOBALS,
			SectionSpec::Functions => Self::FUNCTIONS,
		}
	}
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the hdrdoc CLI.
struct Cli {
	/// Output file for the documentation, or `-` for stdout
	output: PathBuf,

	/// Directory searched for the header when it is not found as given (repeatable)
	#[arg(short = 'I', long = "include", value_name = "DIR")]
	include: Vec<PathBuf>,

	/// Header to document
	#[arg(short = 'H', long, default_value = "src/oj/oj.h")]
	header: PathBuf,

	/// Select the output format
	#[arg(short = 'f', long, value_enum, default_value = "html")]
	format: OutputFormat,

	/// Token whose quoted value is reported as the version
	#[arg(long, default_value = DEFAULT_VERSION_TOKEN)]
	version_token: String,

	/// Page title
	#[arg(long, default_value = DEFAULT_TITLE)]
	title: String,

	/// Only document declarations whose name matches (`|` separates alternatives)
	#[arg(short = 's', long)]
	search: Option<String>,

	/// Match the search query case sensitively
	#[arg(short = 'c', long, default_value_t = false)]
	case_sensitive: bool,

	/// Comma-separated list of sections to document. Defaults to all.
	#[arg(long, value_enum, value_delimiter = ',', value_name = "SECTION[,SECTION...]")]
	sections: Vec<SectionSpec>,

	/// Log progress and skipped declarations
	#[arg(short = 'v', long, default_value_t = false, conflicts_with = "quiet")]
	verbose: bool,

	/// Only log errors and skip the summary line
	#[arg(short = 'q', long, default_value_t = false)]
	quiet: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), Box<dyn Error>> {
	let level = if quiet {
		"error"
	} else if verbose {
		"debug"
	} else {
		"warn"
	};

	let filter = tracing_subscriber::EnvFilter::try_from_env("HDRDOC_LOG")
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.try_init()
		.map_err(|e| format!("failed to initialize logging: {e}"))?;

	Ok(())
}

fn should_color_output(cli: &Cli) -> bool {
	if cli.no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stderr().is_terminal()
}

/// Build a `Hdrdoc` instance from the CLI options.
fn build_hdrdoc(cli: &Cli) -> Result<Hdrdoc, Box<dyn Error>> {
	let mut hd = Hdrdoc::new()
		.with_include_dirs(cli.include.clone())
		.with_version_token(cli.version_token.clone())
		.with_title(cli.title.clone())
		.with_render_format(cli.format.into());

	if let Some(pattern) = cli.search.as_deref() {
		hd = hd.with_query(Query::new(pattern, cli.case_sensitive)?);
	}

	let sections = cli
		.sections
		.iter()
		.fold(Sections::empty(), |acc, spec| acc | Sections::from(*spec));
	if !sections.is_empty() {
		hd = hd.with_sections(sections);
	}

	Ok(hd)
}

/// One-line count summary printed after a successful run.
fn summary(doc: &Document, color: bool) -> String {
	let schema = &doc.schema;
	let counts = format!(
		"{} enums, {} types, {} globals, {} functions (v{})",
		schema.enums.len(),
		schema.types.len(),
		schema.globals.len(),
		schema.functions.len(),
		doc.version_label()
	);
	if color {
		format!("{} {counts}", "Documented".bright_green().bold())
	} else {
		format!("Documented {counts}")
	}
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let hd = build_hdrdoc(cli)?;

	let doc = if cli.output.as_os_str() == "-" {
		let doc = hd.load(&cli.header)?;
		print!("{}", hd.render(&doc)?);
		doc
	} else {
		hd.generate(&cli.header, &cli.output)?
	};

	if !cli.quiet {
		eprintln!("{}", summary(&doc, should_color_output(cli)));
	}

	Ok(())
}

fn main() {
	let cli = Cli::parse();
	if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
		eprintln!("{e}");
		process::exit(1);
	}

	if let Err(e) = run(&cli) {
		if should_color_output(&cli) {
			eprintln!("{} {e}", "error:".bright_red().bold());
		} else {
			eprintln!("error: {e}");
		}
		process::exit(1);
	}
}
