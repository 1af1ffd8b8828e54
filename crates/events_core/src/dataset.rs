//! Raw tabular input handed to the validator.

/// A single data row: the raw string fields in file order.
pub type RawRow = Vec<String>;

/// A fully loaded events file.
///
/// Holds the header record and every data row exactly as read, untrimmed.
/// Field counts are not checked here; the validator decides what a
/// malformed row means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDataset {
    header: Vec<String>,
    rows: Vec<RawRow>,
}

impl EventDataset {
    /// Creates a dataset from a header and its data rows.
    pub fn new(header: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { header, rows }
    }

    /// Creates a dataset with the given header and no data rows.
    pub fn with_header(header: Vec<String>) -> Self {
        Self::new(header, Vec::new())
    }

    /// Returns the header record.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the data rows in file order.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Returns the number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a data row.
    pub fn add_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_operations() {
        let mut dataset = EventDataset::with_header(vec!["a".to_string(), "b".to_string()]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.header(), ["a", "b"]);

        dataset.add_row(vec!["1".to_string(), "2".to_string()]);
        dataset.add_row(vec!["3".to_string()]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[1], vec!["3".to_string()]);
    }
}
