//! CLI binary for tex2nb.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConvertOptions`, picks one of the three pipelines, and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tex2nb::{convert_delimiters, convert_to_file, extract_body, ConvertOptions};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a worksheet to notebook JSON (stdout)
  tex2nb worksheet.tex

  # Convert to a file
  tex2nb worksheet.tex -o worksheet.ipynb

  # Read from stdin, fill in metadata placeholders
  cat worksheet.tex | tex2nb - --topic "Number Theory" --difficulty Hard

  # Normalise math delimiters to $/$$ form instead of structuring
  tex2nb --delimiters-only worksheet.tex -o normalised.tex

  # Print just the body between \begin{document} and \end{document}
  tex2nb --body-only worksheet.tex

  # Compact single-line JSON for piping
  tex2nb --compact worksheet.tex | jq '.cells | length'

INPUT CONVENTIONS:
  Section marker   \section*{[SECTION_01]}    top-level content block
  Atomic marker    \section*{[atomic_part1]}  nested sub-part of a section
  Wrapper          \begin{document} / \end{document}   (optional; content
                   outside the wrapper is ignored when present)

ENVIRONMENT VARIABLES:
  TEX2NB_OUTPUT       Default output path (same as -o)
  TEX2NB_TOPIC        Default metadata topic
  TEX2NB_SUBTOPIC     Default metadata subtopic
  TEX2NB_DIFFICULTY   Default metadata difficulty
"#;

/// Convert sectioned LaTeX worksheets to Jupyter notebooks.
#[derive(Parser, Debug)]
#[command(
    name = "tex2nb",
    version,
    about = "Convert sectioned LaTeX worksheets to Jupyter notebooks",
    long_about = "Convert LaTeX-formatted mathematical content into notebook form: sections \
marked with \\section*{[...]} become markdown cells with stable ids, nested atomic parts \
become their own cells, and math macros are re-escaped to survive cell embedding. \
Alternative modes normalise math delimiters to $/$$ form or extract the document body.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// LaTeX input file, or `-` for stdin.
    input: String,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "TEX2NB_OUTPUT")]
    output: Option<PathBuf>,

    /// Emit compact single-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Normalise math delimiters to $/$$ form instead of structuring.
    #[arg(long, conflicts_with = "body_only")]
    delimiters_only: bool,

    /// Print the body between the document wrapper markers and exit.
    #[arg(long)]
    body_only: bool,

    /// Metadata topic placeholder.
    #[arg(long, env = "TEX2NB_TOPIC")]
    topic: Option<String>,

    /// Metadata subtopic placeholder.
    #[arg(long, env = "TEX2NB_SUBTOPIC")]
    subtopic: Option<String>,

    /// Metadata difficulty placeholder.
    #[arg(long, env = "TEX2NB_DIFFICULTY")]
    difficulty: Option<String>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TEX2NB_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "TEX2NB_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Read input ───────────────────────────────────────────────────────
    let text = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read LaTeX from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read input file '{}'", cli.input))?
    };

    // ── Body-only mode ───────────────────────────────────────────────────
    if cli.body_only {
        write_text(cli.output.as_deref(), extract_body(&text))?;
        return Ok(());
    }

    // ── Delimiter-normalisation mode ─────────────────────────────────────
    if cli.delimiters_only {
        let (normalized, count) = convert_delimiters(&text);
        write_text(cli.output.as_deref(), &normalized)?;
        if !cli.quiet {
            eprintln!(
                "{} Converted {} math environments",
                green("✔"),
                bold(&count.to_string())
            );
        }
        return Ok(());
    }

    // ── Structuring pipeline (default) ───────────────────────────────────
    let mut options = ConvertOptions::default();
    if let Some(topic) = cli.topic {
        options.topic = topic;
    }
    if let Some(subtopic) = cli.subtopic {
        options.subtopic = subtopic;
    }
    if let Some(difficulty) = cli.difficulty {
        options.difficulty = difficulty;
    }

    if let Some(ref output_path) = cli.output {
        let notebook =
            convert_to_file(&text, output_path, &options).context("Conversion failed")?;
        if !cli.quiet {
            eprintln!(
                "{}  {} cells  →  {}",
                green("✔"),
                dim(&notebook.cells.len().to_string()),
                bold(&output_path.display().to_string()),
            );
        }
    } else {
        let notebook = tex2nb::convert(&text, &options);
        let json = if cli.compact {
            notebook.to_json().context("Failed to serialise notebook")?
        } else {
            notebook
                .to_json_pretty()
                .context("Failed to serialise notebook")?
        };
        write_text(None, &json)?;
    }

    Ok(())
}

/// Write `text` (with a trailing newline) to `path`, or to stdout when no
/// path is given.
fn write_text(path: Option<&std::path::Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut out = text.to_owned();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            std::fs::write(path, out)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            if !text.ends_with('\n') {
                handle.write_all(b"\n").context("Failed to write to stdout")?;
            }
            Ok(())
        }
    }
}
