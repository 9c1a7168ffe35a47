//! 수신 메시지 펌프.
//!
//! WebSocket 수신 채널 → 프로토콜 디코딩 → 스토어 명령 큐.

use benchpulse_core::models::command::StoreCommand;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::protocol::decode_server_message;
use crate::ws_client::WsMessage;

/// 연결이 닫히거나 명령 큐가 닫힐 때까지 메시지 전달. 전달한 명령 수를 반환한다.
pub async fn pump_messages(
    mut rx: mpsc::Receiver<WsMessage>,
    commands: mpsc::Sender<StoreCommand>,
) -> usize {
    let mut forwarded = 0;

    while let Some(message) = rx.recv().await {
        let decoded = match message {
            WsMessage::Text(text) => decode_server_message(&text),
            WsMessage::Binary(data) => match std::str::from_utf8(&data) {
                Ok(text) => decode_server_message(text),
                Err(_) => {
                    debug!("UTF-8이 아닌 바이너리 프레임 무시: {}바이트", data.len());
                    continue;
                }
            },
            WsMessage::Close => {
                info!("서버 연결 종료");
                break;
            }
        };

        let command = match decoded {
            Ok(command) => command,
            Err(e) => {
                debug!("서버 메시지 무시: {e}");
                continue;
            }
        };

        if let Some(command) = command {
            if commands.send(command).await.is_err() {
                info!("스토어 명령 큐 닫힘, 수신 중단");
                break;
            }
            forwarded += 1;
        }
    }

    forwarded
}
