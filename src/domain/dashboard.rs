// Dashboard domain model
use super::chart::ChartGrid;
use super::selection::DashboardState;
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Automobile Sales Statistics Dashboard";
pub const REPORT_PLACEHOLDER: &str = "Select a report type";
pub const YEAR_PLACEHOLDER: &str = "Select year";

/// Everything the page needs after one selection change.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub state: DashboardState,
    pub year_selector_enabled: bool,
    pub grid: ChartGrid,
}

impl DashboardView {
    pub fn new(state: DashboardState, year_selector_enabled: bool, grid: ChartGrid) -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            state,
            year_selector_enabled,
            grid,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorOptions {
    pub title: String,
    pub report_placeholder: String,
    pub report_types: Vec<SelectorOption>,
    pub year_placeholder: String,
    pub years: Vec<i32>,
}
