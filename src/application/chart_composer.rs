// Chart composer - Maps summary tables to chart specs in a two-by-two grid
use crate::domain::chart::{AxisBinding, ChartGrid, ChartKind, ChartSpec};
use crate::domain::summary::{SummaryScope, SummaryTable, SummaryTables};

/// Build the chart grid. No tables means an empty grid.
pub fn compose(tables: Option<SummaryTables>) -> ChartGrid {
    let Some(SummaryTables { scope, tables }) = tables else {
        return ChartGrid::default();
    };

    let [first, second, third, fourth] = tables;
    let [c1, c2, c3, c4] = match scope {
        SummaryScope::Year(year) => [
            line("yearly-trend", "Yearly Average Automobile Sales".to_string(), first),
            line(
                "yearly-monthly-sales",
                format!("Total Monthly Automobile Sales in {}", year),
                second,
            ),
            bar(
                "yearly-sales-by-type",
                format!("Average Vehicles Sold by Vehicle Type in {}", year),
                third,
                None,
            ),
            pie(
                "yearly-advertising-share",
                format!("Total Advertising Expenditure by Vehicle Type in {}", year),
                fourth,
            ),
        ],
        SummaryScope::Recession => [
            line(
                "recession-trend",
                "Average Automobile Sales Over Recession Years".to_string(),
                first,
            ),
            bar(
                "recession-sales-by-type",
                "Average Vehicle Sales by Type (Recession)".to_string(),
                second,
                None,
            ),
            pie(
                "recession-advertising-share",
                "Ad Expenditure Share by Vehicle Type (Recession)".to_string(),
                third,
            ),
            bar(
                "recession-unemployment-effect",
                "Effect of Unemployment Rate on Vehicle Sales (Recession)".to_string(),
                fourth,
                Some("Vehicle_Type"),
            ),
        ],
    };

    ChartGrid {
        rows: vec![[c1, c2], [c3, c4]],
    }
}

fn cartesian(table: &SummaryTable, color: Option<&str>) -> AxisBinding {
    AxisBinding::Cartesian {
        x: table.key_label.clone(),
        y: table.value_label.clone(),
        color: color.map(str::to_string),
    }
}

fn line(id: &str, title: String, table: SummaryTable) -> ChartSpec {
    ChartSpec {
        id: id.to_string(),
        kind: ChartKind::Line,
        title,
        binding: cartesian(&table, None),
        table,
    }
}

fn bar(id: &str, title: String, table: SummaryTable, color: Option<&str>) -> ChartSpec {
    ChartSpec {
        id: id.to_string(),
        kind: ChartKind::Bar,
        title,
        binding: cartesian(&table, color),
        table,
    }
}

fn pie(id: &str, title: String, table: SummaryTable) -> ChartSpec {
    ChartSpec {
        id: id.to_string(),
        kind: ChartKind::Pie,
        title,
        binding: AxisBinding::Pie {
            names: table.key_label.clone(),
            values: table.value_label.clone(),
        },
        table,
    }
}
