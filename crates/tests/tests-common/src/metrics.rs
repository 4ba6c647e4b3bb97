//! A metric sink that remembers what it was given.

use std::sync::Mutex;

use async_trait::async_trait;

use probe_engine_metrics::{IngestionError, MetricName, MetricPoint, MetricSink};

#[derive(Debug, Default)]
pub struct RecordingSink {
    points: Mutex<Vec<MetricPoint>>,
    reject: Option<MetricName>,
}

impl RecordingSink {
    /// A sink that rejects every point with the given name.
    pub fn rejecting(name: MetricName) -> Self {
        Self {
            points: Mutex::default(),
            reject: Some(name),
        }
    }

    /// The points accepted so far, in the order they arrived.
    pub fn points(&self) -> Vec<MetricPoint> {
        self.points.lock().unwrap().clone()
    }

    pub fn value_of(&self, name: MetricName) -> Option<f64> {
        self.points()
            .into_iter()
            .find(|point| point.name == name)
            .map(|point| point.value)
    }
}

#[async_trait]
impl MetricSink for RecordingSink {
    async fn put_metric(&self, point: &MetricPoint) -> Result<(), IngestionError> {
        if self.reject == Some(point.name) {
            return Err(IngestionError::Rejected {
                metric: point.name,
                namespace: point.namespace.clone(),
                message: "throttled".to_string(),
            });
        }
        self.points.lock().unwrap().push(point.clone());
        Ok(())
    }
}
