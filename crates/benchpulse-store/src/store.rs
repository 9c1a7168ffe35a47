//! 메트릭 스토어 — 수집 파이프라인.
//!
//! 세션 토큰 검증 → 배치 파싱 → 시계열 누적.
//! 세션 제어 연산은 세션 교체와 테이블 비우기를 한 번에 수행한다.

use benchpulse_core::models::observation::Observation;
use benchpulse_core::models::session::{BenchId, SessionToken};
use benchpulse_core::models::subscription::SubscriptionRequest;
use tracing::debug;

use crate::parser::{parse_line, RECORD_DELIMITER};
use crate::series::SeriesAccumulator;
use crate::session::SessionContext;

/// 세션 컨텍스트와 시계열 테이블을 단독 소유하는 스토어
#[derive(Debug, Default)]
pub struct MetricsStore {
    session: SessionContext,
    series: SeriesAccumulator,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 벤치마크 구독 시작: 새 토큰 생성, 기준 시각/테이블 초기화
    pub fn reset_subscriptions(&mut self, bench_id: BenchId) {
        self.session.reset(bench_id);
        self.series.clear();
    }

    /// 알려진 세션으로 전환: 테이블, 기준 시각, 로드 플래그 초기화
    pub fn change_session(&mut self, bench_id: BenchId, token: SessionToken) {
        self.session.change(bench_id, token);
        self.series.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    pub fn mark_batch_finished(&mut self, token: &SessionToken) -> bool {
        self.session.mark_batch_finished(token)
    }

    /// 원시 배치 수집. 수용된 관측값 수를 반환한다.
    ///
    /// 토큰이 현재 세션과 다르면 아무 상태도 바꾸지 않고 0을 반환한다.
    pub fn ingest(&mut self, metric: &str, token: &SessionToken, raw: &str) -> usize {
        if !self.session.accepts(token) {
            debug!("만료된 세션 데이터 무시: metric={metric}, token={token}");
            return 0;
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for line in raw.split(RECORD_DELIMITER) {
            match parse_line(line) {
                Some(observation) => {
                    if self.series.add_observation(metric, observation) {
                        accepted += 1;
                    } else {
                        rejected += 1;
                    }
                }
                None if line.trim().is_empty() => {}
                None => rejected += 1,
            }
        }

        if rejected > 0 {
            debug!("메트릭 {metric}: {rejected}줄 버림, {accepted}줄 수용");
        }
        accepted
    }

    pub fn current_bench_id(&self) -> Option<BenchId> {
        self.session.bench_id()
    }

    pub fn current_token(&self) -> &SessionToken {
        self.session.token()
    }

    pub fn series(&self, metric: &str) -> &[Observation] {
        self.series.series(metric)
    }

    pub fn max_relative_date(&self, metric: &str) -> i64 {
        self.series.max_relative_date(metric)
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn accumulator(&self) -> &SeriesAccumulator {
        &self.series
    }

    /// 현재 세션 기준 구독 요청 생성
    pub fn subscription_request(
        &self,
        metrics: impl IntoIterator<Item = String>,
    ) -> SubscriptionRequest {
        SubscriptionRequest::new(self.session.bench_id(), self.session.token().clone(), metrics)
    }
}
