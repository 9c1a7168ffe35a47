//! WebSocket 클라이언트.
//!
//! `tokio-tungstenite` 기반. 수신은 별도 태스크가 채널로 넘기고,
//! 송신은 `WsSender`가 담당한다.

use benchpulse_core::error::CoreError;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// 수신 채널 용량
const INBOUND_CHANNEL_CAPACITY: usize = 256;

/// WebSocket 클라이언트
pub struct WsClient {
    url: String,
    connect_timeout: Duration,
}

/// WebSocket으로 수신한 메시지
#[derive(Debug, Clone, PartialEq)]
pub enum WsMessage {
    /// 텍스트 메시지 (JSON)
    Text(String),
    /// 바이너리 메시지
    Binary(Vec<u8>),
    /// 연결 종료
    Close,
}

impl WsClient {
    /// 새 WebSocket 클라이언트 생성. http(s) 주소는 ws(s)로 바꾼다.
    pub fn new(url: &str, connect_timeout: Duration) -> Self {
        let url = url
            .replacen("http://", "ws://", 1)
            .replacen("https://", "wss://", 1);
        Self {
            url,
            connect_timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// WebSocket 연결 수립
    ///
    /// 수신 메시지는 반환된 수신기로, 송신은 `WsSender`로 처리.
    pub async fn connect(&self) -> Result<(WsSender, mpsc::Receiver<WsMessage>), CoreError> {
        info!("WebSocket 연결: {}", self.url);

        let (ws_stream, _) =
            tokio::time::timeout(self.connect_timeout, tokio_tungstenite::connect_async(&self.url))
                .await
                .map_err(|_| {
                    CoreError::Network(format!(
                        "WebSocket 연결 타임아웃: {}ms",
                        self.connect_timeout.as_millis()
                    ))
                })?
                .map_err(|e| CoreError::Network(format!("WebSocket 연결 실패: {e}")))?;

        let (write, read) = StreamExt::split(ws_stream);
        let (tx, rx) = mpsc::channel(INBOUND_CHANNEL_CAPACITY);

        tokio::spawn(Self::read_loop(read, tx));

        Ok((
            WsSender {
                write: Arc::new(tokio::sync::Mutex::new(write)),
            },
            rx,
        ))
    }

    async fn read_loop(mut read: SplitStream<WsStream>, tx: mpsc::Sender<WsMessage>) {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if tx.send(WsMessage::Text(text.to_string())).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Binary(data)) => {
                    if tx.send(WsMessage::Binary(data.to_vec())).await.is_err() {
                        break;
                    }
                }
                Ok(Message::Close(_)) => {
                    let _ = tx.send(WsMessage::Close).await;
                    break;
                }
                Ok(_) => {} // Ping/Pong은 자동 처리
                Err(e) => {
                    warn!("WebSocket 수신 에러: {e}");
                    let _ = tx.send(WsMessage::Close).await;
                    break;
                }
            }
        }
        debug!("WebSocket 수신 루프 종료");
    }
}

/// WebSocket 송신기
#[derive(Clone)]
pub struct WsSender {
    write: Arc<tokio::sync::Mutex<SplitSink<WsStream, Message>>>,
}

impl WsSender {
    /// 텍스트 메시지 전송
    pub async fn send_text(&self, text: &str) -> Result<(), CoreError> {
        let mut write = self.write.lock().await;
        write
            .send(Message::text(text.to_string()))
            .await
            .map_err(|e| CoreError::Network(format!("WebSocket 전송 실패: {e}")))
    }

    /// 연결 종료
    pub async fn close(&self) -> Result<(), CoreError> {
        let mut write = self.write.lock().await;
        write
            .send(Message::Close(None))
            .await
            .map_err(|e| CoreError::Network(format!("WebSocket 종료 실패: {e}")))
    }
}
