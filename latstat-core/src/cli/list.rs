use crate::cli::NO_LOGS_MESSAGE;
use crate::latency::{discover_logs, render_menu};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Directory to scan for .txt logs
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

/// Prints the numbered candidate list without prompting.
pub fn run_list<W: Write>(args: &ListArgs, out: &mut W) -> anyhow::Result<()> {
    let candidates = discover_logs(&args.dir)?;

    if candidates.is_empty() {
        tracing::warn!(dir = %args.dir.display(), "no log files found");
        writeln!(out, "{NO_LOGS_MESSAGE}")?;
        return Ok(());
    }

    out.write_all(render_menu(&candidates).as_bytes())?;
    Ok(())
}
