//! 스토어 명령 모델.
//!
//! 디스패치 경로로 전달되는 타입 지정 메시지. 스토어 액터 하나가
//! 순서대로 소비하므로 세션 제어와 수집이 서로 섞이지 않는다.

use std::collections::BTreeSet;

use super::session::{BenchId, SessionToken};

/// 스토어 인바운드 명령
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    /// 메트릭 구독 요청 (네트워크 협력자에게 위임)
    SubscribeMetrics { metrics: BTreeSet<String> },
    /// 메트릭 데이터 배치 수신
    MetricData {
        metric: String,
        token: SessionToken,
        data: String,
    },
    /// 서버가 과거 데이터 전송을 마침
    BatchFinished { token: SessionToken },
    /// 새 벤치마크로 구독 초기화 (새 토큰 생성)
    ResetSubscriptions { bench_id: BenchId },
    /// 알려진 세션으로 전환 (외부 토큰 채택)
    ChangeSession {
        bench_id: BenchId,
        token: SessionToken,
    },
}

impl StoreCommand {
    /// 로그용 명령 이름
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SubscribeMetrics { .. } => "SUBSCRIBE_METRICS",
            Self::MetricData { .. } => "METRIC_DATA",
            Self::BatchFinished { .. } => "METRIC_BATCH_END",
            Self::ResetSubscriptions { .. } => "RESET_SUBSCRIPTIONS",
            Self::ChangeSession { .. } => "CHANGE_SESSION",
        }
    }
}
