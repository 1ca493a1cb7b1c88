use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Wall-clock time spent in each pipeline stage of one run.
#[derive(Debug, Default)]
pub struct RunMetrics {
    stages: Vec<StageTiming>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageTiming {
    pub stage: &'static str,
    pub elapsed_ms: f64,
    pub items: usize,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: &'static str, duration: Duration, items: usize) {
        let elapsed_ms = duration.as_micros() as f64 / 1000.0; // Convert to ms
        info!(stage, elapsed_ms, items, "Stage finished");
        self.stages.push(StageTiming {
            stage,
            elapsed_ms,
            items,
        });
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_ms: self.stages.iter().map(|s| s.elapsed_ms).sum(),
            stages: self.stages.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self, metrics: &mut RunMetrics, stage: &'static str, items: usize) {
        metrics.record(stage, self.elapsed(), items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_totals() {
        let mut metrics = RunMetrics::new();
        metrics.record("ingest", Duration::from_millis(3), 2);
        metrics.record("extract", Duration::from_micros(1500), 40);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.stages.len(), 2);
        assert_eq!(snapshot.stages[1].stage, "extract");
        assert!((snapshot.total_ms - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_timed_operation_records_stage() {
        let mut metrics = RunMetrics::new();
        let timer = TimedOperation::start();
        timer.finish(&mut metrics, "report", 1);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.stages[0].stage, "report");
        assert!(snapshot.total_ms >= 0.0);
    }
}
