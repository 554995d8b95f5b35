// Dashboard service - Recomputes the dashboard view for a selection
use crate::application::aggregation::summarize;
use crate::application::chart_composer::compose;
use crate::application::sales_repository::SalesRepository;
use crate::domain::dashboard::{
    DashboardView, SelectorOption, SelectorOptions, DASHBOARD_TITLE, REPORT_PLACEHOLDER,
    YEAR_PLACEHOLDER,
};
use crate::domain::selection::{year_selector_enabled, ReportType, Selection};
use std::ops::RangeInclusive;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SalesRepository>,
    years: RangeInclusive<i32>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SalesRepository>, years: RangeInclusive<i32>) -> Self {
        Self { repository, years }
    }

    /// Full recomputation for one selection change.
    pub fn render(&self, selection: &Selection) -> DashboardView {
        let state = selection.state();
        let tables = summarize(selection, self.repository.dataset());
        let grid = compose(tables);
        debug_assert_eq!(grid.chart_count(), state.chart_count());

        tracing::debug!(
            ?state,
            charts = grid.chart_count(),
            empty_charts = grid.empty_chart_count(),
            "Recomputed dashboard"
        );

        DashboardView::new(state, year_selector_enabled(selection.report_type), grid)
    }

    pub fn options(&self) -> SelectorOptions {
        SelectorOptions {
            title: DASHBOARD_TITLE.to_string(),
            report_placeholder: REPORT_PLACEHOLDER.to_string(),
            report_types: ReportType::ALL
                .iter()
                .map(|r| SelectorOption {
                    label: r.label().to_string(),
                    value: r.label().to_string(),
                })
                .collect(),
            year_placeholder: YEAR_PLACEHOLDER.to_string(),
            years: self.years.clone().collect(),
        }
    }
}
