//! 변경 알림 시 시계열 요약 로그.

use benchpulse_store::actor::StoreView;
use std::fmt;

/// 메트릭 하나의 현재 상태
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: String,
    pub points: usize,
    pub max_relative_date: i64,
    pub last_value: Option<f64>,
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_value {
            Some(value) => write!(
                f,
                "{}: {}개, t+{} = {}",
                self.metric, self.points, self.max_relative_date, value
            ),
            None => write!(f, "{}: 데이터 없음", self.metric),
        }
    }
}

/// 구독한 메트릭 순서대로 요약
pub fn summarize(view: &StoreView, metrics: &[String]) -> Vec<MetricSummary> {
    view.read(|store| {
        metrics
            .iter()
            .map(|metric| {
                let series = store.series(metric);
                MetricSummary {
                    metric: metric.clone(),
                    points: series.len(),
                    max_relative_date: store.max_relative_date(metric),
                    last_value: series.last().map(|o| o.value),
                }
            })
            .collect()
    })
}
