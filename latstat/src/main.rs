use clap::{Parser, Subcommand};
use latstat_core::cli::{ListArgs, ReportArgs, run_list, run_report};
use latstat_core::error::{LatencyError, error_hint};
use latstat_core::latency::{ChoiceProvider, FixedChoice, ReaderChoice};
use latstat_core::logging::{LogFormat, default_log_format, init_logging};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "latstat",
    version,
    about = "latstat: latency statistics from receiver node logs"
)]
struct Cli {
    /// Format of diagnostic logs written to stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a log file and print per-event latency statistics (default)
    Report(ReportArgs),

    /// Print the numbered list of log files and exit
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::List(args)) => run_list(&args, &mut io::stdout().lock()),
        Some(Command::Report(args)) => report(&args),
        None => report(&ReportArgs::default()),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");

        if let Some(hint) = err.downcast_ref::<LatencyError>().and_then(error_hint) {
            eprintln!();
            eprintln!("{hint}");
        }

        std::process::exit(1);
    }
}

fn report(args: &ReportArgs) -> anyhow::Result<()> {
    let mut choice: Box<dyn ChoiceProvider> = match args.index {
        Some(index) => Box::new(FixedChoice::from(index)),
        None => Box::new(ReaderChoice::new(io::stdin().lock())),
    };

    run_report(
        args,
        choice.as_mut(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
