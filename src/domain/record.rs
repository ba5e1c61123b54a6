// src/domain/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data row keyed by its table's trimmed header names.
///
/// Keys keep header order. A header that appears more than once holds a
/// single entry: the key stays where it first appeared and the value comes
/// from the last column carrying that name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The cell under `key`, or `""` when the column does not exist.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// The first of `keys` present as a column.
    pub fn text_any(&self, keys: &[&str]) -> &str {
        keys.iter().find_map(|k| self.get(k)).unwrap_or("")
    }

    /// Trimmed cell, or `None` when blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        let v = self.text(key).trim();
        (!v.is_empty()).then_some(v)
    }

    /// Canonical identifier comparison: both sides trimmed, compared as strings.
    pub fn matches_id(&self, key: &str, id: &str) -> bool {
        self.text(key).trim() == id.trim()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::default();
        for (k, v) in iter {
            record.insert(k.into(), v.into());
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Header names of a grid, trimmed. Empty when the grid has no rows.
pub fn header_of(grid: &[Vec<String>]) -> Vec<String> {
    grid.first()
        .map(|h| h.iter().map(|c| c.trim().to_string()).collect())
        .unwrap_or_default()
}

/// Map a header-first grid to records. Short rows pad with `""`;
/// cells beyond the header are dropped.
pub fn rows_by_header(grid: &[Vec<String>]) -> Vec<Record> {
    let Some((_, data)) = grid.split_first() else {
        return Vec::new();
    };
    let header = header_of(grid);

    data.iter()
        .map(|row| {
            header
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
