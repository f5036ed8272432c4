/// One report run: raw input text in, rendered HTML table out.
///
/// Any bad line aborts the whole run. Nothing is rendered until every line
/// has been read, so a failure never leaves a partial table behind.
use crate::line::{self, LineError, ResultLine};
use crate::render::{self, Markup};
use crate::table::ResultTable;
use std::io::{Read, Write};

/// Aggregate every data line of `input` and render the table.
pub fn generate(input: &str, markup: Markup) -> Result<String, ReportError> {
    let mut table = ResultTable::new();
    let mut lines = 0usize;

    for (number, text) in line::data_lines(input) {
        let parsed = ResultLine::parse(text, number)?;
        table.record(&parsed);
        lines += 1;
    }

    tracing::info!(lines, records = table.len(), "aggregated results");

    let records = table.into_sorted();
    Ok(render::render_table(&records, markup))
}

/// Read all of `input`, generate the report and write it plus a trailing
/// newline to `output`. Nothing is written if generation fails.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    markup: Markup,
) -> Result<(), ReportError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|e| ReportError::Read { source: e })?;

    let html = generate(&text, markup)?;

    writeln!(output, "{html}").map_err(|e| ReportError::Write { source: e })?;
    output
        .flush()
        .map_err(|e| ReportError::Write { source: e })?;
    Ok(())
}

/// Errors that end a report run.
#[derive(Debug)]
pub enum ReportError {
    Read { source: std::io::Error },
    Write { source: std::io::Error },
    Line(LineError),
}

impl From<LineError> for ReportError {
    fn from(e: LineError) -> Self {
        ReportError::Line(e)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Read { source } => write!(f, "failed to read standard input: {source}"),
            ReportError::Write { source } => write!(f, "failed to write report: {source}"),
            ReportError::Line(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Read { source } => Some(source),
            ReportError::Write { source } => Some(source),
            ReportError::Line(e) => Some(e),
        }
    }
}
