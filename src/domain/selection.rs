// User selection, the year-selector dependency rule and the derived UI state
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown report type '{0}'")]
    UnknownReportType(String),

    #[error("invalid year '{0}'")]
    InvalidYear(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Yearly,
    RecessionPeriod,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::Yearly, ReportType::RecessionPeriod];

    /// Label shown in the report-type dropdown; also accepted when parsing.
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Yearly => "Yearly Statistics",
            ReportType::RecessionPeriod => "Recession Period Statistics",
        }
    }
}

impl FromStr for ReportType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "yearly" | "yearly statistics" => Ok(ReportType::Yearly),
            "recession" | "recession_period" | "recession period statistics" => {
                Ok(ReportType::RecessionPeriod)
            }
            _ => Err(SelectionError::UnknownReportType(trimmed.to_string())),
        }
    }
}

/// The year selector is usable only for yearly reports.
pub fn year_selector_enabled(report_type: Option<ReportType>) -> bool {
    matches!(report_type, Some(ReportType::Yearly))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub report_type: Option<ReportType>,
    pub year: Option<i32>,
}

impl Selection {
    pub fn new(report_type: Option<ReportType>, year: Option<i32>) -> Self {
        Self { report_type, year }
    }

    /// The chosen year, or `None` while the year selector is disabled.
    /// A year left over from an earlier yearly selection is ignored here.
    pub fn effective_year(&self) -> Option<i32> {
        if year_selector_enabled(self.report_type) {
            self.year
        } else {
            None
        }
    }

    pub fn state(&self) -> DashboardState {
        match (self.report_type, self.effective_year()) {
            (None, _) => DashboardState::NoSelection,
            (Some(ReportType::RecessionPeriod), _) => DashboardState::RecessionSelected,
            (Some(ReportType::Yearly), None) => DashboardState::YearlyNoYear,
            (Some(ReportType::Yearly), Some(year)) => DashboardState::YearlyWithYear(year),
        }
    }
}

#[cfg(test)]
impl Selection {
    pub fn recession() -> Self {
        Self::new(Some(ReportType::RecessionPeriod), None)
    }

    pub fn yearly(year: i32) -> Self {
        Self::new(Some(ReportType::Yearly), Some(year))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardState {
    NoSelection,
    RecessionSelected,
    YearlyNoYear,
    YearlyWithYear(i32),
}

impl DashboardState {
    pub fn chart_count(&self) -> usize {
        match self {
            DashboardState::NoSelection | DashboardState::YearlyNoYear => 0,
            DashboardState::RecessionSelected | DashboardState::YearlyWithYear(_) => 4,
        }
    }
}
