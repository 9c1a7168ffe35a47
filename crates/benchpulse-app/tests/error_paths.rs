//! Cross-crate 에러 경로 테스트.
//!
//! 연결 실패, 닫힌 명령 큐 등 크레이트 경계에서의 에러 전파를 검증한다.

use async_trait::async_trait;
use benchpulse_core::error::CoreError;
use benchpulse_core::models::session::BenchId;
use benchpulse_core::models::subscription::SubscriptionRequest;
use benchpulse_core::ports::subscription::SubscriptionClient;
use benchpulse_network::ws_client::WsClient;
use benchpulse_store::actor::StoreActor;
use benchpulse_store::store::MetricsStore;
use std::sync::Arc;
use std::time::Duration;

struct NoopClient;

#[async_trait]
impl SubscriptionClient for NoopClient {
    async fn subscribe(&self, _request: &SubscriptionRequest) -> Result<(), CoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn connect_refused_is_network_error() {
    let ws = WsClient::new("ws://127.0.0.1:1/ws", Duration::from_secs(2));
    let err = ws.connect().await.err().expect("연결이 실패해야 함");
    assert!(matches!(err, CoreError::Network(_)));
    assert!(err.to_string().contains("네트워크"));
}

#[tokio::test]
async fn send_after_actor_dropped_is_channel_closed() {
    let (actor, handle) = StoreActor::new(MetricsStore::new(), Arc::new(NoopClient), 4);
    drop(actor);

    let result = handle.reset_subscriptions(BenchId(1)).await;
    assert!(matches!(result, Err(CoreError::ChannelClosed(_))));
}
