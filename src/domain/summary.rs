// Summary tables: grouped aggregates used as direct chart input
use super::sale::Month;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Grouping key of a summary row. A table only ever holds one variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Year(i32),
    Month(Month),
    VehicleType(String),
    /// `(unemployment_rate, vehicle_type)`
    RateAndType(OrderedFloat<f64>, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Mean,
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: GroupKey,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub key_label: String,
    pub value_label: String,
    pub aggregate: Aggregate,
    /// Ascending by key.
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl SummaryTable {
    /// Group `(key, value)` pairs and reduce each group with `aggregate`.
    pub fn from_pairs<I>(key_label: &str, value_label: &str, aggregate: Aggregate, pairs: I) -> Self
    where
        I: IntoIterator<Item = (GroupKey, f64)>,
    {
        let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();
        for (key, value) in pairs {
            let acc = groups.entry(key).or_default();
            acc.sum += value;
            acc.count += 1;
        }

        let rows = groups
            .into_iter()
            .map(|(key, acc)| {
                let value = match aggregate {
                    Aggregate::Sum => acc.sum,
                    Aggregate::Mean => acc.sum / acc.count as f64,
                };
                SummaryRow { key, value }
            })
            .collect();

        Self {
            key_label: key_label.to_string(),
            value_label: value_label.to_string(),
            aggregate,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.rows.iter().find(|r| &r.key == key).map(|r| r.value)
    }
}

/// What a set of tables was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    Recession,
    Year(i32),
}

/// The four tables computed for one selection, in chart order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTables {
    pub scope: SummaryScope,
    pub tables: [SummaryTable; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_sum() {
        let pairs = vec![
            (GroupKey::VehicleType("SUV".into()), 100.0),
            (GroupKey::VehicleType("SUV".into()), 200.0),
            (GroupKey::VehicleType("Sports".into()), 30.0),
        ];

        let mean = SummaryTable::from_pairs("Vehicle_Type", "Automobile_Sales", Aggregate::Mean, pairs.clone());
        assert_eq!(mean.get(&GroupKey::VehicleType("SUV".into())), Some(150.0));
        assert_eq!(mean.get(&GroupKey::VehicleType("Sports".into())), Some(30.0));

        let sum = SummaryTable::from_pairs("Vehicle_Type", "Automobile_Sales", Aggregate::Sum, pairs);
        assert_eq!(sum.get(&GroupKey::VehicleType("SUV".into())), Some(300.0));
    }

    #[test]
    fn test_rows_ascending_by_key() {
        let pairs = vec![
            (GroupKey::Year(2009), 1.0),
            (GroupKey::Year(1980), 2.0),
            (GroupKey::Year(2001), 3.0),
        ];
        let table = SummaryTable::from_pairs("Year", "Automobile_Sales", Aggregate::Sum, pairs);
        let keys: Vec<_> = table.rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(
            keys,
            vec![GroupKey::Year(1980), GroupKey::Year(2001), GroupKey::Year(2009)]
        );
    }

    #[test]
    fn test_pair_key_orders_by_rate_then_type() {
        let pairs = vec![
            (GroupKey::RateAndType(OrderedFloat(6.5), "SUV".into()), 1.0),
            (GroupKey::RateAndType(OrderedFloat(2.1), "Sports".into()), 1.0),
            (GroupKey::RateAndType(OrderedFloat(2.1), "Executive".into()), 1.0),
        ];
        let table = SummaryTable::from_pairs("Unemployment_Rate", "Automobile_Sales", Aggregate::Mean, pairs);
        assert_eq!(
            table.rows[0].key,
            GroupKey::RateAndType(OrderedFloat(2.1), "Executive".into())
        );
        assert_eq!(
            serde_json::to_value(&table.rows[2].key).unwrap(),
            serde_json::json!([6.5, "SUV"])
        );
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = SummaryTable::from_pairs("Month", "Automobile_Sales", Aggregate::Sum, Vec::new());
        assert!(table.is_empty());
    }
}
