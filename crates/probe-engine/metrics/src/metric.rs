//! The three metrics every probe reports.

use std::fmt;

use enum_iterator::Sequence;
use serde::Serialize;

/// The name of a metric, serialized as the name the monitoring backend sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Sequence)]
pub enum MetricName {
    /// Seconds spent executing the statement.
    #[serde(rename = "SQLQueryResponseTime")]
    QueryResponseTime,
    /// 200 when the probe succeeded, 500 otherwise.
    #[serde(rename = "SQLQueryResponseStatus")]
    QueryResponseStatus,
    /// Seconds spent establishing the connection.
    #[serde(rename = "SQLQueryConnectionTime")]
    QueryConnectionTime,
}

impl MetricName {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricName::QueryResponseTime => "SQLQueryResponseTime",
            MetricName::QueryResponseStatus => "SQLQueryResponseStatus",
            MetricName::QueryConnectionTime => "SQLQueryConnectionTime",
        }
    }

    pub fn unit(self) -> MetricUnit {
        match self {
            MetricName::QueryResponseTime | MetricName::QueryConnectionTime => MetricUnit::Seconds,
            MetricName::QueryResponseStatus => MetricUnit::Unitless,
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Seconds,
    Unitless,
}

/// A single value reported under a namespace, tagged with one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    pub name: MetricName,
    /// The namespace the metric is grouped under: the database name.
    pub namespace: String,
    /// The value of the `QueryName` dimension.
    pub dimension: String,
    pub value: f64,
}

impl MetricPoint {
    pub const DIMENSION_KEY: &'static str = "QueryName";
}
