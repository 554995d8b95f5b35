// Aggregation engine - Derives the four summary tables for a selection
use crate::domain::dataset::{Dataset, DatasetView};
use crate::domain::sale::SaleRecord;
use crate::domain::selection::{ReportType, Selection};
use crate::domain::summary::{Aggregate, GroupKey, SummaryScope, SummaryTable, SummaryTables};
use ordered_float::OrderedFloat;

const YEAR: &str = "Year";
const MONTH: &str = "Month";
const VEHICLE_TYPE: &str = "Vehicle_Type";
const UNEMPLOYMENT_RATE: &str = "Unemployment_Rate";
const SALES: &str = "Automobile_Sales";
const ADVERTISING: &str = "Advertising_Expenditure";

/// Compute the summary tables for `selection`.
///
/// Returns `None` when nothing is selected, or for a yearly report without a year.
/// A filter that matches no rows yields empty tables rather than `None`.
pub fn summarize(selection: &Selection, dataset: &Dataset) -> Option<SummaryTables> {
    match (selection.report_type?, selection.effective_year()) {
        (ReportType::RecessionPeriod, _) => Some(recession_tables(dataset)),
        (ReportType::Yearly, Some(year)) => Some(yearly_tables(dataset, year)),
        (ReportType::Yearly, None) => None,
    }
}

fn recession_tables(dataset: &Dataset) -> SummaryTables {
    let recession = dataset.filter(|r| r.recession);
    tracing::debug!(rows = recession.len(), "Recession rows selected");

    SummaryTables {
        scope: SummaryScope::Recession,
        tables: [
            group(&recession, YEAR, SALES, Aggregate::Mean, by_year, sales),
            group(&recession, VEHICLE_TYPE, SALES, Aggregate::Mean, by_vehicle_type, sales),
            group(&recession, VEHICLE_TYPE, ADVERTISING, Aggregate::Sum, by_vehicle_type, advertising),
            group(&recession, UNEMPLOYMENT_RATE, SALES, Aggregate::Mean, by_rate_and_type, sales),
        ],
    }
}

fn yearly_tables(dataset: &Dataset, year: i32) -> SummaryTables {
    // The trend line always spans every year; the rest use the year slice.
    let all = dataset.view();
    let slice = all.filter(|r| r.year == year);
    if slice.is_empty() {
        tracing::debug!(year, "No rows for selected year");
    }

    SummaryTables {
        scope: SummaryScope::Year(year),
        tables: [
            group(&all, YEAR, SALES, Aggregate::Mean, by_year, sales),
            group(&slice, MONTH, SALES, Aggregate::Sum, by_month, sales),
            group(&slice, VEHICLE_TYPE, SALES, Aggregate::Mean, by_vehicle_type, sales),
            group(&slice, VEHICLE_TYPE, ADVERTISING, Aggregate::Sum, by_vehicle_type, advertising),
        ],
    }
}

fn group(
    view: &DatasetView<'_>,
    key_label: &str,
    value_label: &str,
    aggregate: Aggregate,
    key: fn(&SaleRecord) -> GroupKey,
    value: fn(&SaleRecord) -> f64,
) -> SummaryTable {
    SummaryTable::from_pairs(
        key_label,
        value_label,
        aggregate,
        view.iter().map(|r| (key(r), value(r))),
    )
}

fn by_year(r: &SaleRecord) -> GroupKey {
    GroupKey::Year(r.year)
}

fn by_month(r: &SaleRecord) -> GroupKey {
    GroupKey::Month(r.month)
}

fn by_vehicle_type(r: &SaleRecord) -> GroupKey {
    GroupKey::VehicleType(r.vehicle_type.clone())
}

fn by_rate_and_type(r: &SaleRecord) -> GroupKey {
    GroupKey::RateAndType(OrderedFloat(r.unemployment_rate), r.vehicle_type.clone())
}

fn sales(r: &SaleRecord) -> f64 {
    r.automobile_sales
}

fn advertising(r: &SaleRecord) -> f64 {
    r.advertising_expenditure
}
