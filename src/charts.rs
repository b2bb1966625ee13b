use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Horizon selected by the dashboard's HOURLY / DAILY / MONTHLY buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRange {
    Hourly,
    Daily,
    Monthly,
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = match self {
            ChartRange::Hourly => "hourly",
            ChartRange::Daily => "daily",
            ChartRange::Monthly => "monthly",
        };
        f.write_str(range)
    }
}

impl std::str::FromStr for ChartRange {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "hourly" => Ok(ChartRange::Hourly),
            "daily" => Ok(ChartRange::Daily),
            "monthly" => Ok(ChartRange::Monthly),
            _ => Err("Invalid chart range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub data: Vec<SeriesPoint>,
}

const PRIMARY_VALUES: [f64; 6] = [43.0, 137.0, 61.0, 145.0, 26.0, 154.0];
const SECONDARY_VALUES: [f64; 6] = [60.0, 48.0, 177.0, 78.0, 96.0, 204.0];

/// Fixed placeholder data for the eight chart panels. No live feed exists
/// yet, so every panel draws the same two series with range-appropriate
/// labels.
pub fn placeholder_series(range: ChartRange) -> Vec<Series> {
    let labels: [&str; 6] = match range {
        ChartRange::Hourly => ["00h", "04h", "08h", "12h", "16h", "20h"],
        ChartRange::Daily => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        ChartRange::Monthly => ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    };
    let build = |id: &str, values: &[f64; 6]| Series {
        id: id.to_owned(),
        data: labels
            .iter()
            .zip(values.iter())
            .map(|(x, y)| SeriesPoint { x: (*x).to_owned(), y: *y })
            .collect(),
    };
    vec![build("primary", &PRIMARY_VALUES), build("secondary", &SECONDARY_VALUES)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_round_trips_through_strings() {
        for name in ["hourly", "daily", "monthly"] {
            let range: ChartRange = name.parse().unwrap();
            assert_eq!(range.to_string(), name);
        }
        assert!("weekly".parse::<ChartRange>().is_err());
    }

    #[test]
    fn placeholder_shape() {
        let series = placeholder_series(ChartRange::Monthly);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].id, "primary");
        assert_eq!(series[0].data.len(), 6);
        assert_eq!(series[0].data[0], SeriesPoint { x: "Jan".to_owned(), y: 43.0 });
        assert_eq!(series[1].data[5], SeriesPoint { x: "Jun".to_owned(), y: 204.0 });

        let hourly = placeholder_series(ChartRange::Hourly);
        assert_eq!(hourly[0].data[0].x, "00h");
        // same placeholder values on every horizon
        assert_eq!(hourly[1].data[2].y, 177.0);
    }
}
