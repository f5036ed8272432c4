//! Benchmark result line schema.
//!
//! A result line is a run of whitespace-separated tokens. Only four positions
//! carry meaning; everything else (run ids, filler columns, trailing tokens)
//! is ignored.
//!
//! ```text
//! r1 x x clsA x x precision x dsA x x 0.91
//!        ^^^^     ^^^^^^^^^   ^^^     ^^^^
//!        3        6           8       11
//! ```

/// Token index of the classifier class name.
pub const CLASSNAME_INDEX: usize = 3;
/// Token index of the metric name (`precision` or `recall`).
pub const METRIC_INDEX: usize = 6;
/// Token index of the dataset name.
pub const DATASET_INDEX: usize = 8;
/// Token index of the metric value.
pub const VALUE_INDEX: usize = 11;
/// Minimum token count for a line to be readable.
pub const MIN_TOKENS: usize = VALUE_INDEX + 1;

/// The two measurements a result line can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Precision,
    Recall,
}

impl Metric {
    /// Classify a metric token. Matching is exact and case-sensitive.
    pub fn classify(token: &str, line: usize) -> Result<Metric, LineError> {
        match token {
            "precision" => Ok(Metric::Precision),
            "recall" => Ok(Metric::Recall),
            other => Err(LineError::InvalidMetric {
                line,
                metric: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Precision => "precision",
            Metric::Recall => "recall",
        }
    }
}

/// The fields extracted from one result line, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine<'a> {
    pub classname: &'a str,
    pub dataset: &'a str,
    pub metric: Metric,
    pub value: &'a str,
}

impl<'a> ResultLine<'a> {
    /// Parse a single non-empty line. `line` is the 1-based line number used
    /// in error reports.
    pub fn parse(text: &'a str, line: usize) -> Result<ResultLine<'a>, LineError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < MIN_TOKENS {
            return Err(LineError::MalformedLine {
                line,
                tokens: tokens.len(),
            });
        }

        let metric = Metric::classify(tokens[METRIC_INDEX], line)?;

        Ok(ResultLine {
            classname: tokens[CLASSNAME_INDEX],
            dataset: tokens[DATASET_INDEX],
            metric,
            value: tokens[VALUE_INDEX],
        })
    }
}

/// Iterate over the lines that carry data, paired with their 1-based line
/// numbers. Only empty lines are skipped; a line holding nothing but
/// whitespace is still handed to the parser (and rejected there).
pub fn data_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split('\n')
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(idx, text)| (idx + 1, text))
}

/// Fatal problems with a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    MalformedLine { line: usize, tokens: usize },
    InvalidMetric { line: usize, metric: String },
}

impl LineError {
    /// 1-based number of the offending line.
    #[allow(dead_code)]
    pub fn line(&self) -> usize {
        match self {
            LineError::MalformedLine { line, .. } | LineError::InvalidMetric { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::MalformedLine { line, tokens } => write!(
                f,
                "malformed line {line}: expected at least {MIN_TOKENS} tokens, found {tokens}"
            ),
            LineError::InvalidMetric { line, metric } => write!(
                f,
                "invalid metric on line {line}: {metric:?} (expected \"precision\" or \"recall\")"
            ),
        }
    }
}

impl std::error::Error for LineError {}
