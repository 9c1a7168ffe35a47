//! 메트릭 구독 포트.
//!
//! 구현: `benchpulse-network` crate (tokio-tungstenite)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::subscription::SubscriptionRequest;

/// 구독 요청 전송 인터페이스.
///
/// 전송은 fire-and-forget이다. 호출자는 실패를 로그로만 남기고
/// 스토어 상태에는 반영하지 않는다.
#[async_trait]
pub trait SubscriptionClient: Send + Sync {
    /// 현재 세션의 메트릭 구독 요청 전송
    async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), CoreError>;
}
