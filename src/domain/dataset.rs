// Resident sales dataset and read-only filtered views
use super::sale::SaleRecord;

/// The full sales table, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A view over every row.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            rows: self.records.iter().collect(),
        }
    }

    pub fn filter<P>(&self, predicate: P) -> DatasetView<'_>
    where
        P: Fn(&SaleRecord) -> bool,
    {
        DatasetView {
            rows: self.records.iter().filter(|r| predicate(r)).collect(),
        }
    }
}

/// Borrowed subset of a [`Dataset`].
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    rows: Vec<&'a SaleRecord>,
}

impl<'a> DatasetView<'a> {
    pub fn filter<P>(&self, predicate: P) -> DatasetView<'a>
    where
        P: Fn(&SaleRecord) -> bool,
    {
        DatasetView {
            rows: self.rows.iter().copied().filter(|r| predicate(r)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SaleRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
