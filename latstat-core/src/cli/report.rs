use crate::cli::NO_LOGS_MESSAGE;
use crate::latency::{
    ChoiceProvider, Report, discover_logs, display_name, read_latencies, select_file,
};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Directory to scan for .txt logs
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Select the file at this menu index instead of prompting
    #[arg(long)]
    pub index: Option<usize>,

    /// How to print the statistics
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            index: None,
            format: ReportFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Plain,
    Pretty,
    Json,
}

/// Runs the whole pipeline: list, select, extract, report.
///
/// The report goes to `out`. The menu, prompt and "no files" message go to
/// `out` as well, except in JSON format where they go to `prompt_out` so
/// that `out` carries nothing but the JSON array.
///
/// Returns `Ok(None)` when the directory has no candidate logs.
pub fn run_report<W: Write, P: Write>(
    args: &ReportArgs,
    choice: &mut dyn ChoiceProvider,
    out: &mut W,
    prompt_out: &mut P,
) -> anyhow::Result<Option<Report>> {
    let console: &mut dyn Write = match args.format {
        ReportFormat::Json => prompt_out,
        ReportFormat::Plain | ReportFormat::Pretty => &mut *out,
    };

    let candidates = discover_logs(&args.dir)?;

    if candidates.is_empty() {
        tracing::warn!(dir = %args.dir.display(), "no log files found");
        writeln!(console, "{NO_LOGS_MESSAGE}")?;
        return Ok(None);
    }

    let selected = select_file(&candidates, console, choice)?;
    tracing::info!(file = %display_name(selected), "processing log file");

    let samples = read_latencies(selected)?;
    let report = Report::from_samples(&samples);

    let rendered = match args.format {
        ReportFormat::Plain => report.render_plain(),
        ReportFormat::Pretty => report.render_pretty(),
        ReportFormat::Json => format!("{}\n", report.render_json()?),
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    tracing::debug!(samples = samples.total(), "report written");

    Ok(Some(report))
}
