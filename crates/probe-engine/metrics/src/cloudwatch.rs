//! Amazon CloudWatch integration.

use async_trait::async_trait;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};

use crate::error::IngestionError;
use crate::metric::{MetricPoint, MetricUnit};
use crate::MetricSink;

/// Sends every point to CloudWatch with its own `PutMetricData` call.
#[derive(Debug, Clone)]
pub struct CloudWatchSink {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchSink {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudwatch::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl MetricSink for CloudWatchSink {
    async fn put_metric(&self, point: &MetricPoint) -> Result<(), IngestionError> {
        let datum = to_datum(point);

        self.client
            .put_metric_data()
            .namespace(&point.namespace)
            .metric_data(datum)
            .send()
            .await
            .map_err(|error| IngestionError::Rejected {
                metric: point.name,
                namespace: point.namespace.clone(),
                message: DisplayErrorContext(&error).to_string(),
            })?;

        tracing::debug!(
            metric = %point.name,
            namespace = %point.namespace,
            value = point.value,
            "Metric sent to CloudWatch"
        );
        Ok(())
    }
}

fn to_datum(point: &MetricPoint) -> MetricDatum {
    let dimension = Dimension::builder()
        .name(MetricPoint::DIMENSION_KEY)
        .value(&point.dimension)
        .build();

    MetricDatum::builder()
        .metric_name(point.name.as_str())
        .dimensions(dimension)
        .value(point.value)
        .unit(standard_unit(point.name.unit()))
        .build()
}

fn standard_unit(unit: MetricUnit) -> StandardUnit {
    match unit {
        MetricUnit::Seconds => StandardUnit::Seconds,
        MetricUnit::Unitless => StandardUnit::None,
    }
}
