// Chart descriptors handed to the presentation layer
use super::summary::SummaryTable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Which table columns drive which visual channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "binding", rename_all = "snake_case")]
pub enum AxisBinding {
    /// For pair keys, `x` is the first key component and `color` the second.
    Cartesian {
        x: String,
        y: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Pie {
        names: String,
        values: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub binding: AxisBinding,
    pub table: SummaryTable,
}

/// Two charts per row. Either empty or exactly two rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartGrid {
    pub rows: Vec<[ChartSpec; 2]>,
}

impl ChartGrid {
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    pub fn chart_count(&self) -> usize {
        self.rows.len() * 2
    }

    /// Number of charts whose table has no rows.
    pub fn empty_chart_count(&self) -> usize {
        self.charts().filter(|c| c.table.is_empty()).count()
    }
}

#[cfg(test)]
impl ChartGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
