// Domain layer - Sales records, selections, summaries and chart descriptors
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod sale;
pub mod selection;
pub mod summary;
