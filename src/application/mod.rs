// Application layer - Use cases over the resident sales dataset
pub mod aggregation;
pub mod chart_composer;
pub mod dashboard_service;
pub mod sales_repository;
