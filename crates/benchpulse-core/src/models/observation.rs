//! 관측값 모델.

use serde::{Deserialize, Serialize};

/// 파서가 내보내는 원시 관측값 (절대 타임스탬프)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// 절대 타임스탬프
    pub date: i64,
    /// 측정값
    pub value: f64,
}

/// 시계열에 저장되는 관측값.
///
/// `relative_date` = 절대 타임스탬프 − 세션 기준 시각.
/// 기준 시각보다 앞선 샘플이 늦게 도착하면 음수가 될 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// 세션 기준 시각으로부터의 오프셋
    pub relative_date: i64,
    /// 측정값
    pub value: f64,
}

impl Observation {
    pub fn new(relative_date: i64, value: f64) -> Self {
        Self {
            relative_date,
            value,
        }
    }
}
