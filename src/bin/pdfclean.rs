//! CLI binary for pdf-textclean.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `PipelineConfig` and prints the run summary.

use anyhow::{Context, Result};
use clap::Parser;
use pdf_textclean::{PipelineConfig, PipelineOutput, TextPipeline};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Clean a PDF, writing report.txt next to it
  pdfclean report.pdf --dictionary frequency_dictionary_en_82_765.txt

  # Explicit output file
  pdfclean report.pdf -o cleaned.txt --dictionary words.txt

  # Skip spelling correction (no dictionary needed)
  pdfclean report.pdf --no-spelling

  # Machine-readable summary
  pdfclean report.pdf --no-spelling --json

DICTIONARY:
  One `word count` pair per line, separated by a single space, e.g.
    the 23135851162
    of 13151942776
  The SymSpell English frequency dictionary works as-is.

PDFIUM:
  The pdfium shared library is looked up at --pdfium-lib, then
  PDFIUM_LIB_PATH, then the current directory, then the system paths.
"#;

/// Extract, clean and segment the text of a PDF.
#[derive(Parser, Debug)]
#[command(
    name = "pdfclean",
    version,
    about = "Extract, spell-correct, strip stopwords from and segment the text of a PDF",
    long_about = "Extract the text layer of a PDF, collapse whitespace, correct spelling against \
a word-frequency dictionary, drop common stopwords and regroup the sentences into three-sentence \
paragraphs. Reports how similar the result is to the raw extraction.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to clean.
    input: PathBuf,

    /// Write the cleaned text here (default: INPUT with a .txt extension).
    #[arg(short, long, env = "PDFCLEAN_OUTPUT")]
    output: Option<PathBuf>,

    /// Word-frequency dictionary for spelling correction.
    #[arg(long, env = "PDFCLEAN_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Skip spelling correction.
    #[arg(long, env = "PDFCLEAN_NO_SPELLING")]
    no_spelling: bool,

    /// Maximum edit distance for spelling suggestions (0–3).
    #[arg(long, env = "PDFCLEAN_MAX_EDIT_DISTANCE", default_value_t = 2,
          value_parser = clap::value_parser!(i64).range(0..=3))]
    max_edit_distance: i64,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDFCLEAN_PASSWORD")]
    password: Option<String>,

    /// Path to the pdfium shared library.
    #[arg(long, env = "PDFCLEAN_PDFIUM_LIB")]
    pdfium_lib: Option<PathBuf>,

    /// Print a JSON summary instead of the console report.
    #[arg(long, env = "PDFCLEAN_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFCLEAN_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFCLEAN_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries the report; logs always go to stderr.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build pipeline ───────────────────────────────────────────────────
    let config = build_config(&cli)?;
    let pipeline = TextPipeline::new(&config).context("Failed to set up the pipeline")?;

    // ── Run ──────────────────────────────────────────────────────────────
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    let output = pipeline
        .run(&cli.input, &output_path)
        .with_context(|| format!("Cleaning {} failed", cli.input.display()))?;

    if let Some(report) = render_report(&cli, &output)? {
        println!("{report}");
    }

    Ok(())
}

/// What to print on stdout for a finished run; `None` under `--quiet`.
fn render_report(cli: &Cli, output: &PipelineOutput) -> Result<Option<String>> {
    if cli.quiet {
        return Ok(None);
    }
    if cli.json {
        let json = serde_json::to_string_pretty(output).context("Failed to serialise output")?;
        return Ok(Some(json));
    }
    Ok(Some(output.summary_lines().join("\n")))
}

/// Map CLI args to `PipelineConfig`.
fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut builder = PipelineConfig::builder()
        .spelling(!cli.no_spelling)
        .max_edit_distance(cli.max_edit_distance);

    if let Some(ref path) = cli.dictionary {
        builder = builder.dictionary_path(path);
    }
    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd);
    }
    if let Some(ref path) = cli.pdfium_lib {
        builder = builder.pdfium_library_path(path);
    }

    builder.build().context("Invalid configuration")
}

/// `INPUT` with its extension replaced by `.txt`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}
