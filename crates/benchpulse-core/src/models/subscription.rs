//! 구독 요청 모델.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::session::{BenchId, SessionToken};

/// 메트릭 구독 요청 — 네트워크 어댑터가 서버로 전송한다
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    /// 현재 벤치마크 ID (세션이 아직 없으면 None)
    pub bench_id: Option<BenchId>,
    /// 현재 세션 토큰
    pub token: SessionToken,
    /// 요청 메트릭 이름 (정렬, 중복 없음)
    pub metrics: Vec<String>,
}

impl SubscriptionRequest {
    pub fn new(
        bench_id: Option<BenchId>,
        token: SessionToken,
        metrics: impl IntoIterator<Item = String>,
    ) -> Self {
        let metrics: BTreeSet<String> = metrics.into_iter().collect();
        Self {
            bench_id,
            token,
            metrics: metrics.into_iter().collect(),
        }
    }
}
