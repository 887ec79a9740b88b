use crate::error::LxResult;
use fnv::FnvHashMap;
use std::io::Write;
use strum_macros::{Display, EnumIter, EnumString};

/// The three counting operations. `Display` yields the header of the key column.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Analysis {
    #[strum(serialize = "Letter")]
    Letters,
    #[strum(serialize = "Words")]
    Words,
    #[strum(serialize = "K-gram")]
    Kgrams,
}

/// Counts keys while remembering the order in which each key was first seen.
///
/// Keys live in `entries` in first-insertion order; `index` maps a key to its slot.
/// Ranking with a stable sort then resolves equal counts by that order.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    index: FnvHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn add_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.add(c.encode_utf8(&mut buf));
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts by count descending (stable) and keeps at most `limit` rows.
    pub fn most_common(self, analysis: Analysis, limit: Option<usize>) -> FrequencyTable {
        let mut rows = self.entries;
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        FrequencyTable { analysis, rows }
    }
}

/// Ranked `(key, count)` rows produced by one counting operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    analysis: Analysis,
    rows: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn analysis(&self) -> Analysis {
        self.analysis
    }

    /// Header of the key column: `Letter`, `Words` or `K-gram`.
    pub fn key_header(&self) -> String {
        self.analysis.to_string()
    }

    pub fn rows(&self) -> &[(String, usize)] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(k, _)| k.as_str())
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|(_, c)| *c)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the counts of the rows kept in this table.
    pub fn total(&self) -> usize {
        self.counts().sum()
    }

    /// Fraction of `total()` held by row `i`, 0.0 for an empty table.
    pub fn share(&self, i: usize) -> f64 {
        let total = self.total();
        match self.rows.get(i) {
            Some((_, count)) if total > 0 => *count as f64 / total as f64,
            _ => 0.0,
        }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> LxResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([self.key_header().as_str(), "Count"])?;
        for (key, count) in &self.rows {
            wtr.write_record([key.as_str(), count.to_string().as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
