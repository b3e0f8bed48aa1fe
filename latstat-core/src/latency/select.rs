use crate::error::LatencyError;
use crate::latency::display_name;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A source of the user's answer to the file menu.
///
/// The console implementation blocks on standard input; tests and the
/// `--index` flag supply the answer up front.
pub trait ChoiceProvider {
    /// Returns the raw text of the user's answer, without the line ending.
    fn read_choice(&mut self) -> Result<String, LatencyError>;
}

/// Reads one line per choice from a buffered reader, typically stdin.
pub struct ReaderChoice<R> {
    reader: R,
}

impl<R: BufRead> ReaderChoice<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ChoiceProvider for ReaderChoice<R> {
    fn read_choice(&mut self) -> Result<String, LatencyError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(LatencyError::ReadInput)?;

        if read == 0 {
            return Err(LatencyError::NoSelection);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct FixedChoice(String);

impl FixedChoice {
    pub fn new(choice: impl Into<String>) -> Self {
        Self(choice.into())
    }
}

impl From<usize> for FixedChoice {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl ChoiceProvider for FixedChoice {
    fn read_choice(&mut self) -> Result<String, LatencyError> {
        Ok(self.0.clone())
    }
}

/// Renders the numbered file menu, one `<index>: <name>` line per file.
pub fn render_menu(candidates: &[PathBuf]) -> String {
    let mut out = String::from("Select a file:\n");
    for (index, path) in candidates.iter().enumerate() {
        out.push_str(&format!("{index}: {}\n", display_name(path)));
    }
    out
}

/// Prints the menu and prompt to `out`, then resolves the provider's answer
/// to one of `candidates`.
///
/// There is no retry: an answer that is not an integer, or that does not
/// name an entry of the menu, is returned as an error.
pub fn select_file<'a, W: Write + ?Sized>(
    candidates: &'a [PathBuf],
    out: &mut W,
    choice: &mut dyn ChoiceProvider,
) -> anyhow::Result<&'a PathBuf> {
    out.write_all(render_menu(candidates).as_bytes())?;
    out.write_all(b"Enter the index of the selected file: ")?;
    out.flush()?;

    let answer = choice.read_choice()?;
    Ok(resolve_choice(candidates, &answer)?)
}

/// Parses `answer` as a zero-based index into `candidates`.
///
/// Negative answers are out of range. Python-style indexing from the end
/// (`-1` meaning the last file) is not supported.
pub fn resolve_choice<'a>(
    candidates: &'a [PathBuf],
    answer: &str,
) -> Result<&'a PathBuf, LatencyError> {
    let trimmed = answer.trim();
    let index = trimmed
        .parse::<i64>()
        .map_err(|e| LatencyError::InvalidSelection {
            input: trimmed.to_string(),
            source: e,
        })?;

    usize::try_from(index)
        .ok()
        .and_then(|i| candidates.get(i))
        .ok_or(LatencyError::SelectionOutOfRange {
            index,
            len: candidates.len(),
        })
}
