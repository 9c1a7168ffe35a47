//! 현재 벤치마크 세션 컨텍스트.
//!
//! 토큰이 바뀌면 이전 토큰을 단 메시지는 이후 모두 무시된다.

use benchpulse_core::models::session::{BenchId, SessionToken};
use tracing::{debug, info};

/// 현재 활성 세션 식별 정보
#[derive(Debug, Clone)]
pub struct SessionContext {
    bench_id: Option<BenchId>,
    token: SessionToken,
    loaded: bool,
}

impl SessionContext {
    /// 벤치마크가 지정되지 않은 초기 세션
    pub fn new() -> Self {
        Self {
            bench_id: None,
            token: SessionToken::generate(),
            loaded: false,
        }
    }

    /// 새 벤치마크 ID와 새 무작위 토큰으로 교체.
    ///
    /// 로드 플래그는 건드리지 않는다 (`change`와 다름).
    pub fn reset(&mut self, bench_id: BenchId) {
        self.bench_id = Some(bench_id);
        self.token = SessionToken::generate();
        info!("세션 초기화: bench={bench_id}, token={}", self.token);
    }

    /// 외부에서 받은 벤치마크 ID/토큰 채택 (세션 재개). 로드 플래그 해제.
    pub fn change(&mut self, bench_id: BenchId, token: SessionToken) {
        self.bench_id = Some(bench_id);
        self.token = token;
        self.loaded = false;
        info!("세션 전환: bench={bench_id}, token={}", self.token);
    }

    /// 토큰이 현재 세션 것인지
    pub fn accepts(&self, token: &SessionToken) -> bool {
        self.token == *token
    }

    /// 배치 전송 완료 표시. 토큰이 다르면 아무것도 하지 않는다.
    pub fn mark_batch_finished(&mut self, token: &SessionToken) -> bool {
        if !self.accepts(token) {
            debug!("만료된 세션의 배치 완료 무시: {token}");
            return false;
        }
        self.loaded = true;
        true
    }

    /// 데이터 로드 완료 여부. 현재는 항상 true를 보고한다.
    pub fn is_loaded(&self) -> bool {
        true
    }

    /// 실제 로드 플래그 값
    pub fn loaded_flag(&self) -> bool {
        self.loaded
    }

    pub fn bench_id(&self) -> Option<BenchId> {
        self.bench_id
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
