//! BenchPulse 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러를 `CoreError`로 매핑한다.
//! 수집 코어(파싱/세션 검증/누적)는 에러를 반환하지 않는다 — 잘못된 레코드와
//! 만료된 세션 메시지는 조용히 버려진다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (연결 실패, 전송 실패)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 서버 메시지 형식 오류
    #[error("프로토콜 에러: {0}")]
    Protocol(String),

    /// 명령 채널이 닫힘 (스토어 액터 종료)
    #[error("명령 채널 닫힘: {0}")]
    ChannelClosed(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
