//! undocx CLI - DOCX to sectioned HTML conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::detect::validate_upload_name;
use undocx::render::DEFAULT_SECTION_MARKER;
use undocx::{
    parse_file_with_options, ConversionStats, ConvertOptions, ConvertResult, DocumentConverter,
    DocxConverter, HtmlOptions, JsonFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert DOCX content to sectioned HTML and JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to head, text and FAQ JSON
    Convert {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Paragraph text that separates sections
        #[arg(long, env = "UNDOCX_MARKER", default_value = DEFAULT_SECTION_MARKER)]
        marker: String,

        /// Emit hyperlinks without target="_blank"
        #[arg(long)]
        no_target: bool,

        /// Ignore unreadable styles and relationships
        #[arg(long)]
        lenient: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert many DOCX files in parallel
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Paragraph text that separates sections
        #[arg(long, env = "UNDOCX_MARKER", default_value = DEFAULT_SECTION_MARKER)]
        marker: String,

        /// Ignore unreadable styles and relationships
        #[arg(long)]
        lenient: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            compact,
            marker,
            no_target,
            lenient,
        }) => {
            let options = convert_options(&marker, no_target, lenient);
            cmd_convert(&input, output.as_deref(), json_format(compact), &options)
        }
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
            marker,
            lenient,
        }) => {
            let options = convert_options(&marker, false, lenient);
            cmd_batch(&inputs, &output, json_format(compact), &options)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let options = convert_options(DEFAULT_SECTION_MARKER, false, false);
                cmd_convert(&input, cli.output.as_deref(), JsonFormat::Pretty, &options)
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn convert_options(marker: &str, no_target: bool, lenient: bool) -> ConvertOptions {
    let mut html = HtmlOptions::new().with_section_marker(marker);
    if no_target {
        html = html.without_link_target();
    }

    let mut options = ConvertOptions::new().with_html_options(html);
    if lenient {
        options = options.lenient();
    }
    log::debug!(
        "Options: marker={:?} link_target={:?} error_mode={:?}",
        options.html.section_marker,
        options.html.link_target,
        options.error_mode
    );
    options
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

/// Reject anything that is not named `*.docx` before touching the file.
fn ensure_docx(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    validate_upload_name(&name)?;
    Ok(())
}

/// `DIR/<stem>.json` for a given input file.
fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!("{}.json", stem))
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    format: JsonFormat,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_docx(input)?;
    log::debug!("Converting {}", input.display());

    let result = DocxConverter::new().convert(input, options)?;
    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    ensure_docx(input)?;

    // Lenient: show what can be read even if styles are damaged
    let doc = parse_file_with_options(input, ParseOptions::new().lenient())?;
    let options = ConvertOptions::new().lenient().with_stats(true);
    let result = DocxConverter::new().convert_document(&doc, &options)?;
    let stats = result.stats.unwrap_or_default();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Styles".bold(), doc.metadata.style_count);
    println!("{}: {}", "Hyperlinks".bold(), doc.hyperlinks.len());

    println!();
    println!("{}", "Section Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Markers".bold(), stats.marker_count);
    println!("{}: {}", "Skipped".bold(), stats.skipped_count);
    println!(
        "{}: {} items in {} lists",
        "Lists".bold(),
        stats.list_item_count,
        stats.list_count
    );
    println!(
        "{}: {} ({} questions, {} answers)",
        "FAQ pairs".bold(),
        stats.faq_pair_count,
        stats.question_count,
        stats.answer_count
    );

    let words = doc.plain_text().split_whitespace().count();
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    format: JsonFormat,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    for input in inputs {
        ensure_docx(input)?;
    }
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Converting...");

    let options = options.clone().with_stats(true);
    let results =
        DocxConverter::new().convert_files_with_progress(inputs, &options, |path, _| {
            log::debug!("Finished {}", path.display());
            pb.set_message(path.display().to_string());
            pb.inc(1);
        });
    pb.finish_with_message("Done!");

    let stats = aggregate_stats(&results);

    let mut failed = Vec::new();
    for (path, result) in results {
        match result.and_then(|r| r.to_json(format)) {
            Ok(json) => fs::write(output_path(output_dir, &path), json)?,
            Err(e) => failed.push((path, e)),
        }
    }

    let converted = inputs.len() - failed.len();
    println!(
        "\n{} {} of {} files",
        "Converted".green().bold(),
        converted,
        inputs.len()
    );
    println!(
        "  {} {} paragraphs, {} lists, {} FAQ pairs",
        "├─".dimmed(),
        stats.paragraph_count,
        stats.list_count,
        stats.faq_pair_count
    );
    println!("  {} {}", "└─".dimmed(), output_dir.display());
    for (path, e) in &failed {
        println!("  {} {}: {}", "✗".red(), path.display(), e);
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed to convert", failed.len()).into())
    }
}

/// Sum the statistics of every successful conversion.
fn aggregate_stats(results: &[(PathBuf, undocx::Result<ConvertResult>)]) -> ConversionStats {
    let mut total = ConversionStats::new();
    for stats in results
        .iter()
        .filter_map(|(_, result)| result.as_ref().ok())
        .filter_map(|result| result.stats.as_ref())
    {
        total.merge(stats);
    }
    total
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX to sectioned HTML conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/undocx".dimmed());
    println!("License: MIT");
}
