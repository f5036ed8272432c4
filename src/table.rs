/// Aggregation of result lines into one record per (classname, dataset).
use crate::line::{Metric, ResultLine};
use std::collections::HashMap;
use tracing::debug;

/// Identity of a record. Compared and hashed as a pair, so ("a", "b_c") and
/// ("a_b", "c") never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub classname: String,
    pub dataset: String,
}

/// Precision and recall collected for one classname on one dataset.
/// Values are the raw tokens from the input, unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub name: String,
    pub dataset: String,
    pub recall: Option<String>,
    pub precision: Option<String>,
}

impl ResultRecord {
    fn new(name: &str, dataset: &str) -> Self {
        Self {
            name: name.to_string(),
            dataset: dataset.to_string(),
            recall: None,
            precision: None,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<String> {
        match metric {
            Metric::Precision => &mut self.precision,
            Metric::Recall => &mut self.recall,
        }
    }
}

/// All records seen so far, kept in first-appearance order.
#[derive(Debug, Default)]
pub struct ResultTable {
    records: Vec<ResultRecord>,
    index: HashMap<RecordKey, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed line into the table, creating its record on first
    /// sight. A repeated metric for the same key replaces the earlier value.
    pub fn record(&mut self, line: &ResultLine<'_>) {
        let key = RecordKey {
            classname: line.classname.to_string(),
            dataset: line.dataset.to_string(),
        };

        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                debug!(classname = line.classname, dataset = line.dataset, "new record");
                self.records.push(ResultRecord::new(line.classname, line.dataset));
                let idx = self.records.len() - 1;
                self.index.insert(key, idx);
                idx
            }
        };

        let slot = self.records[idx].slot_mut(line.metric);
        if let Some(previous) = slot.as_deref() {
            debug!(
                classname = line.classname,
                dataset = line.dataset,
                metric = line.metric.as_str(),
                previous,
                value = line.value,
                "overwriting metric"
            );
        }
        *slot = Some(line.value.to_string());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the table, returning records sorted by classname. The sort is
    /// stable: records sharing a classname stay in first-appearance order.
    pub fn into_sorted(self) -> Vec<ResultRecord> {
        let mut records = self.records;
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}
