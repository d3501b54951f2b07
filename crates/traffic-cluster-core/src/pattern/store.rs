//! Tab-separated pattern loading and per-view lookup.

use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::debug;

use crate::error::{ClusterError, ClusterResult};
use crate::pattern::view::{PatternView, DAILY_LEN, WEEKLY_LEN};

/// Holds one activity vector per entity for each pattern view.
///
/// Records are tab-separated: an identifier followed by either 24 (daily)
/// or 70 (weekly) numeric fields. Daily and weekly records for the same
/// identifier may arrive in any order; the combined vector materializes as
/// soon as both halves are present, daily fields first.
///
/// The store is populated once by [`PatternStore::load`] and read-only
/// afterwards. Vectors are keyed in a `BTreeMap` so iteration order is
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    daily: BTreeMap<String, Vec<f64>>,
    weekly: BTreeMap<String, Vec<f64>>,
    combined: BTreeMap<String, Vec<f64>>,
}

impl PatternStore {
    /// Load patterns from a tab-separated source.
    ///
    /// Blank lines are skipped. A later record for the same (id, view)
    /// replaces the earlier one, and the combined vector is rebuilt from
    /// the stored halves.
    ///
    /// # Errors
    ///
    /// - [`ClusterError::Parse`] if a record's field count matches neither
    ///   view length, the identifier is empty, or a value is not numeric
    /// - [`ClusterError::Io`] if reading from the source fails
    pub fn load(reader: impl BufRead) -> ClusterResult<Self> {
        let mut store = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            if line.trim().is_empty() {
                continue;
            }
            store.insert_record(idx + 1, line)?;
        }
        debug!(
            daily = store.daily.len(),
            weekly = store.weekly.len(),
            combined = store.combined.len(),
            "loaded activity patterns"
        );
        Ok(store)
    }

    fn insert_record(&mut self, line_no: usize, line: &str) -> ClusterResult<()> {
        let mut fields = line.split('\t');
        // split always yields at least one item
        let id = fields.next().unwrap_or_default().trim();
        if id.is_empty() {
            return Err(ClusterError::parse(line_no, "empty identifier"));
        }

        let mut values = Vec::with_capacity(DAILY_LEN);
        for (pos, field) in fields.enumerate() {
            let value: f64 = field.trim().parse().map_err(|_| {
                ClusterError::parse(
                    line_no,
                    format!("value field {} is not numeric: {:?}", pos + 1, field),
                )
            })?;
            values.push(value);
        }

        match values.len() {
            DAILY_LEN => {
                self.daily.insert(id.to_string(), values);
            }
            WEEKLY_LEN => {
                self.weekly.insert(id.to_string(), values);
            }
            other => {
                return Err(ClusterError::parse(
                    line_no,
                    format!(
                        "record has {} value fields; expected {} (daily) or {} (weekly)",
                        other, DAILY_LEN, WEEKLY_LEN
                    ),
                ));
            }
        }

        // Combined is available only once both halves exist, daily first.
        if let (Some(daily), Some(weekly)) = (self.daily.get(id), self.weekly.get(id)) {
            let mut combined = Vec::with_capacity(daily.len() + weekly.len());
            combined.extend_from_slice(daily);
            combined.extend_from_slice(weekly);
            self.combined.insert(id.to_string(), combined);
        }
        Ok(())
    }

    /// The mapping id -> vector for the requested view.
    pub fn vectors(&self, view: PatternView) -> &BTreeMap<String, Vec<f64>> {
        match view {
            PatternView::Daily => &self.daily,
            PatternView::Weekly => &self.weekly,
            PatternView::Combined => &self.combined,
        }
    }

    /// The fixed vector length for a view (24, 70, or 94).
    #[inline]
    pub fn len(&self, view: PatternView) -> usize {
        view.len()
    }

    /// Number of entities with a vector in the given view.
    pub fn entity_count(&self, view: PatternView) -> usize {
        self.vectors(view).len()
    }

    /// True if no records have been loaded at all.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.weekly.is_empty()
    }
}
