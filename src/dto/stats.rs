use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

/// A count renders as an integer, an amount as a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ChartValue {
    Count(i64),
    Amount(f64),
}

/// A single chart-ready series: labels on `x`, values on `y`, index-aligned.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChartSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub x: Vec<String>,
    pub y: Vec<ChartValue>,
}

impl ChartSeries {
    pub fn from_points<I>(name: impl Into<String>, chart_type: ChartType, points: I) -> Self
    where
        I: IntoIterator<Item = (String, ChartValue)>,
    {
        let (x, y) = points.into_iter().unzip();
        Self {
            name: name.into(),
            chart_type,
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_split_into_parallel_axes() {
        let series = ChartSeries::from_points(
            "Sales",
            ChartType::Bar,
            vec![
                ("Gadget".to_string(), ChartValue::Count(3)),
                ("Widget".to_string(), ChartValue::Count(1)),
            ],
        );
        assert_eq!(series.x, vec!["Gadget", "Widget"]);
        assert_eq!(series.y, vec![ChartValue::Count(3), ChartValue::Count(1)]);
    }

    #[test]
    fn serializes_as_chart_envelope() {
        let series = ChartSeries::from_points(
            "Profit",
            ChartType::Line,
            vec![("2026-10-19".to_string(), ChartValue::Amount(20.0))],
        );
        let json = serde_json::to_value(&series).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Profit",
                "type": "line",
                "x": ["2026-10-19"],
                "y": [20.0]
            })
        );
    }

    #[test]
    fn counts_serialize_as_integers() {
        let json = serde_json::to_string(&ChartValue::Count(1)).expect("serialize");
        assert_eq!(json, "1");
    }

    #[test]
    fn no_points_yields_empty_series() {
        let series = ChartSeries::from_points("Sales", ChartType::Line, Vec::new());
        assert!(series.x.is_empty());
        assert!(series.y.is_empty());
    }
}
