// CSV-backed sales repository
use crate::application::sales_repository::SalesRepository;
use crate::domain::dataset::Dataset;
use crate::domain::sale::SaleRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Year",
    "Month",
    "Automobile_Sales",
    "Vehicle_Type",
    "Advertising_Expenditure",
    "Unemployment_Rate",
    "Recession",
];

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read dataset header: {0}")]
    Header(#[source] csv::Error),

    #[error("dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("malformed row at line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Parse a dataset from CSV. Any unparseable row aborts the load.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(DataLoadError::Header)?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<SaleRecord>() {
        let record = result.map_err(|source| DataLoadError::Malformed {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::NotFound(path.to_path_buf()),
        _ => DataLoadError::Io(e),
    })?;
    read_dataset(io::BufReader::new(file))
}

#[derive(Debug)]
pub struct CsvSalesRepository {
    dataset: Dataset,
}

impl CsvSalesRepository {
    /// Load the file once; the rows stay resident for the repository's lifetime.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let dataset = load_dataset(path)?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            "Loaded sales dataset"
        );
        if dataset.is_empty() {
            tracing::warn!(path = %path.display(), "Sales dataset has no rows");
        }
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl SalesRepository for CsvSalesRepository {
    fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
