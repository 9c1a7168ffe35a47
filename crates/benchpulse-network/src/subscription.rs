//! WebSocket 구독 클라이언트 — `SubscriptionClient` 포트 구현

use async_trait::async_trait;
use benchpulse_core::error::CoreError;
use benchpulse_core::models::subscription::SubscriptionRequest;
use benchpulse_core::ports::subscription::SubscriptionClient;
use tracing::debug;

use crate::protocol::encode_subscribe;
use crate::ws_client::WsSender;

pub struct WsSubscriptionClient {
    sender: WsSender,
}

impl WsSubscriptionClient {
    pub fn new(sender: WsSender) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl SubscriptionClient for WsSubscriptionClient {
    async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), CoreError> {
        let frame = encode_subscribe(request)?;
        debug!(
            "메트릭 구독 전송: bench={:?}, metrics={}",
            request.bench_id,
            request.metrics.len()
        );
        self.sender.send_text(&frame).await
    }
}
