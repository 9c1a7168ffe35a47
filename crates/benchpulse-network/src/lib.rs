//! # benchpulse-network
//!
//! 벤치마크 서버와의 WebSocket 통신 어댑터.
//! 메트릭 구독 요청을 JSON 텍스트 프레임으로 보내고, 서버가 스트리밍하는
//! 메트릭 데이터 프레임을 스토어 명령으로 변환해 명령 큐에 넣는다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use benchpulse_network::ws_client::WsClient;
//! use benchpulse_network::subscription::WsSubscriptionClient;
//!
//! let (sender, rx) = WsClient::new(url, timeout).connect().await?;
//! let client = WsSubscriptionClient::new(sender);
//! tokio::spawn(benchpulse_network::feed::pump_messages(rx, store.sender()));
//! ```

pub mod feed;
pub mod protocol;
pub mod subscription;
pub mod ws_client;
