//! Mock 벤치마크 서버 모듈
//!
//! 클라이언트 통합 테스트를 위한 경량 WebSocket 서버.
//! 구독 요청을 받으면 메트릭마다 데이터 프레임을 보내고,
//! 만료된 토큰 프레임 하나와 배치 종료 프레임을 이어서 보낸다.

use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// 메트릭마다 보내는 배치 (형식 오류 줄 포함)
pub const METRIC_BATCH: &str = "1000\t0.5\nbroken line\n1001\t0.7";

/// 만료된 세션 토큰
pub const STALE_TOKEN: &str = "stale-session";

pub struct MockBenchServer {
    addr: SocketAddr,
    /// 수신한 구독 요청 (JSON)
    pub subscriptions: Arc<Mutex<Vec<Value>>>,
}

impl MockBenchServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let subscriptions = Arc::new(Mutex::new(Vec::new()));

        let recorded = subscriptions.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let Ok(ws) = tokio_tungstenite::accept_async(stream).await else {
                        return;
                    };
                    let (mut write, mut read) = ws.split();

                    while let Some(Ok(msg)) = read.next().await {
                        if msg.is_close() {
                            break;
                        }
                        let Ok(text) = msg.to_text() else { continue };
                        let Ok(request) = serde_json::from_str::<Value>(text) else {
                            continue;
                        };
                        if request["cmd"] != "subscribe_metrics" {
                            continue;
                        }
                        recorded.lock().push(request.clone());

                        for frame in Self::replies(&request) {
                            if write.send(Message::text(frame)).await.is_err() {
                                return;
                            }
                        }
                    }
                });
            }
        });

        Self {
            addr,
            subscriptions,
        }
    }

    pub fn url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    fn replies(request: &Value) -> Vec<String> {
        let guid = request["guid"].as_str().unwrap_or_default().to_string();
        let mut frames = Vec::new();

        for metric in request["metrics"].as_array().into_iter().flatten() {
            frames.push(
                json!({
                    "type": "METRIC_DATA",
                    "metric": metric,
                    "guid": guid,
                    "data": METRIC_BATCH,
                })
                .to_string(),
            );
        }

        frames.push(
            json!({
                "type": "METRIC_DATA",
                "metric": "cpu",
                "guid": STALE_TOKEN,
                "data": "5\t5.0",
            })
            .to_string(),
        );
        frames.push(json!({"type": "BENCH_LOG", "text": "ignored"}).to_string());
        frames.push(json!({"type": "METRIC_BATCH_END", "guid": guid}).to_string());
        frames
    }
}
