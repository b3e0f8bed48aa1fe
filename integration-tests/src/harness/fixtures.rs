use latstat_core::cli::{ReportArgs, ReportFormat, run_report};
use latstat_core::latency::{ChoiceProvider, Report};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory populated with log files for one test.
pub struct LogDir {
    dir: TempDir,
}

/// Captured result of one pipeline run.
pub struct RunOutput {
    pub result: anyhow::Result<Option<Report>>,
    pub stdout: String,
    pub stderr: String,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn with_file(self, name: &str, contents: &str) -> Self {
        fs::write(self.dir.path().join(name), contents).expect("failed to write log fixture");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn args(&self, format: ReportFormat) -> ReportArgs {
        ReportArgs {
            dir: self.path().to_path_buf(),
            index: None,
            format,
        }
    }

    /// Runs the full pipeline against this directory in plain format.
    pub fn run(&self, choice: &mut dyn ChoiceProvider) -> RunOutput {
        self.run_with(&self.args(ReportFormat::Plain), choice)
    }

    pub fn run_with(&self, args: &ReportArgs, choice: &mut dyn ChoiceProvider) -> RunOutput {
        let mut out = Vec::new();
        let mut prompt = Vec::new();
        let result = run_report(args, choice, &mut out, &mut prompt);

        RunOutput {
            result,
            stdout: String::from_utf8(out).expect("report output is utf-8"),
            stderr: String::from_utf8(prompt).expect("prompt output is utf-8"),
        }
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
