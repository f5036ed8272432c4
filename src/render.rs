/// HTML rendering of the aggregated result table.
///
/// The default `Legacy` layout reproduces the historical report byte for
/// byte, including the data rows nested inside `<thead>`. `Corrected` emits
/// well-formed table sections for strict HTML consumers.
use crate::table::ResultRecord;

/// Column labels, in cell order.
pub const COLUMNS: [&str; 4] = ["classname", "dataset", "recall", "precision"];

/// Text shown for a metric that never appeared in the input.
pub const UNSET: &str = "None";

const INDENT: &str = "            ";

/// Table skeleton variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Markup {
    /// Header and data rows all inside `<thead>`.
    #[default]
    Legacy,
    /// Header row in `<thead>`, data rows in `<tbody>`.
    Corrected,
}

/// Render one record as a `<tr>` with four cells.
pub fn render_row(record: &ResultRecord) -> String {
    let cells = [
        record.name.as_str(),
        record.dataset.as_str(),
        record.recall.as_deref().unwrap_or(UNSET),
        record.precision.as_deref().unwrap_or(UNSET),
    ];
    let tds: String = cells
        .iter()
        .map(|cell| format!("<td>{cell}</td>"))
        .collect();
    format!("<tr>{tds}</tr>")
}

fn render_header() -> String {
    COLUMNS
        .iter()
        .map(|label| format!("<th>{label}</th>"))
        .collect()
}

/// Render the full `<table>` element. Records are emitted in the order given.
pub fn render_table(records: &[ResultRecord], markup: Markup) -> String {
    let rows = records
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n");
    let header = render_header();

    match markup {
        Markup::Legacy => format!(
            "<table border=\"1\"><thead>\n{INDENT}{header}\n{INDENT}{rows}\n{INDENT}</thead></table>"
        ),
        Markup::Corrected => format!(
            "<table border=\"1\"><thead>\n{INDENT}<tr>{header}</tr>\n{INDENT}</thead><tbody>\n{INDENT}{rows}\n{INDENT}</tbody></table>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        dataset: &str,
        recall: Option<&str>,
        precision: Option<&str>,
    ) -> ResultRecord {
        ResultRecord {
            name: name.to_string(),
            dataset: dataset.to_string(),
            recall: recall.map(str::to_string),
            precision: precision.map(str::to_string),
        }
    }

    #[test]
    fn test_row_cell_order() {
        let row = render_row(&record("clsA", "dsA", Some("0.88"), Some("0.91")));
        assert_eq!(
            row,
            "<tr><td>clsA</td><td>dsA</td><td>0.88</td><td>0.91</td></tr>"
        );
    }

    #[test]
    fn test_row_unset_metrics_render_none() {
        let row = render_row(&record("clsB", "dsA", None, Some("0.70")));
        assert_eq!(
            row,
            "<tr><td>clsB</td><td>dsA</td><td>None</td><td>0.70</td></tr>"
        );
        let row = render_row(&record("clsC", "dsA", Some("0.5"), None));
        assert!(row.ends_with("<td>0.5</td><td>None</td></tr>"));
    }

    #[test]
    fn test_legacy_table_exact() {
        let records = vec![
            record("clsA", "dsA", Some("0.88"), Some("0.91")),
            record("clsB", "dsA", None, Some("0.70")),
        ];
        let expected = concat!(
            "<table border=\"1\"><thead>\n",
            "            <th>classname</th><th>dataset</th><th>recall</th><th>precision</th>\n",
            "            <tr><td>clsA</td><td>dsA</td><td>0.88</td><td>0.91</td></tr>\n",
            "<tr><td>clsB</td><td>dsA</td><td>None</td><td>0.70</td></tr>\n",
            "            </thead></table>"
        );
        assert_eq!(render_table(&records, Markup::Legacy), expected);
    }

    #[test]
    fn test_legacy_empty_table_keeps_skeleton() {
        let expected = concat!(
            "<table border=\"1\"><thead>\n",
            "            <th>classname</th><th>dataset</th><th>recall</th><th>precision</th>\n",
            "            \n",
            "            </thead></table>"
        );
        assert_eq!(render_table(&[], Markup::Legacy), expected);
    }

    #[test]
    fn test_corrected_table_uses_tbody() {
        let records = vec![record("clsA", "dsA", Some("0.88"), None)];
        let html = render_table(&records, Markup::Corrected);
        assert!(html.starts_with("<table border=\"1\"><thead>\n"));
        assert!(html.contains("<tr><th>classname</th>"));
        assert!(html.contains("</thead><tbody>"));
        assert!(html.contains("<tr><td>clsA</td><td>dsA</td><td>0.88</td><td>None</td></tr>"));
        assert!(html.ends_with("</tbody></table>"));
        let thead_end = html.find("</thead>").unwrap();
        let first_row = html.find("<td>").unwrap();
        assert!(first_row > thead_end, "data rows must follow </thead>");
    }

    #[test]
    fn test_default_markup_is_legacy() {
        assert_eq!(Markup::default(), Markup::Legacy);
    }
}
