// Repository trait for sales data access
use crate::domain::dataset::Dataset;

pub trait SalesRepository: Send + Sync {
    /// The full dataset. Loaded once; read-only for the process lifetime.
    fn dataset(&self) -> &Dataset;
}
