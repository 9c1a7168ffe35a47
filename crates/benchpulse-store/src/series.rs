//! 메트릭별 시계열 누적기.
//!
//! 세션 상태: `Empty`(기준 시각 없음) → 첫 관측값 수용 시 `Anchored`
//! → 세션 제어 연산(`clear`)으로 다시 `Empty`. 다른 전이는 없다.
//!
//! 시계열은 추가 전용이다. 중복 제거나 재정렬을 하지 않으며,
//! `relative_date` 단조성도 강제하지 않는다.

use benchpulse_core::models::observation::{Observation, RawObservation};
use std::collections::HashMap;
use tracing::debug;

/// 누적기 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorState {
    /// 기준 시각 미설정
    Empty,
    /// 첫 관측값의 절대 시각으로 기준 고정
    Anchored(i64),
}

/// 메트릭 이름 → 순서 보존 시계열
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesAccumulator {
    origin_date: Option<i64>,
    table: HashMap<String, Vec<Observation>>,
}

impl SeriesAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 관측값 추가. 수용하면 true.
    ///
    /// 세션 전체(모든 메트릭)에서 처음 수용되는 관측값이 기준 시각을 정한다.
    /// 기준과의 차이가 i64 범위를 벗어나는 샘플은 버린다.
    pub fn add_observation(&mut self, metric: &str, observation: RawObservation) -> bool {
        let origin = *self.origin_date.get_or_insert(observation.date);
        // 기준보다 이른 샘플은 음수 오프셋으로 그대로 저장
        let Some(relative_date) = observation.date.checked_sub(origin) else {
            debug!(
                "메트릭 {metric}: 오프셋 범위 초과 샘플 버림 (date={}, origin={origin})",
                observation.date
            );
            return false;
        };
        let entry = Observation::new(relative_date, observation.value);

        match self.table.get_mut(metric) {
            Some(series) => series.push(entry),
            None => {
                self.table.insert(metric.to_string(), vec![entry]);
            }
        }
        true
    }

    /// 메트릭 시계열. 없는 메트릭이면 빈 슬라이스.
    pub fn series(&self, metric: &str) -> &[Observation] {
        self.table.get(metric).map(Vec::as_slice).unwrap_or_default()
    }

    /// 마지막 관측값의 상대 시각. 비어 있으면 0.
    pub fn max_relative_date(&self, metric: &str) -> i64 {
        self.series(metric)
            .last()
            .map(|o| o.relative_date)
            .unwrap_or(0)
    }

    pub fn origin_date(&self) -> Option<i64> {
        self.origin_date
    }

    pub fn state(&self) -> AccumulatorState {
        match self.origin_date {
            Some(origin) => AccumulatorState::Anchored(origin),
            None => AccumulatorState::Empty,
        }
    }

    /// 테이블 교체 및 기준 시각 해제
    pub fn clear(&mut self) {
        self.origin_date = None;
        self.table = HashMap::new();
    }
}
