//! 서버 와이어 프로토콜 (JSON 텍스트 프레임).
//!
//! 송신: `{"cmd":"subscribe_metrics","bench":7,"guid":"...","metrics":["cpu"]}`
//! 수신: `{"type":"METRIC_DATA","metric":"cpu","guid":"...","data":"1000\t0.5"}`,
//!       `{"type":"METRIC_BATCH_END","guid":"..."}`
//!
//! 알 수 없는 타입은 `None`, 형식 오류 프레임은 `CoreError::Protocol`.

use benchpulse_core::error::CoreError;
use benchpulse_core::models::command::StoreCommand;
use benchpulse_core::models::session::{BenchId, SessionToken};
use benchpulse_core::models::subscription::SubscriptionRequest;
use serde::{Deserialize, Serialize};

/// 클라이언트 → 서버 메시지
#[derive(Debug, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ClientMessage<'a> {
    SubscribeMetrics {
        bench: Option<BenchId>,
        guid: &'a SessionToken,
        metrics: &'a [String],
    },
}

impl<'a> From<&'a SubscriptionRequest> for ClientMessage<'a> {
    fn from(request: &'a SubscriptionRequest) -> Self {
        Self::SubscribeMetrics {
            bench: request.bench_id,
            guid: &request.token,
            metrics: &request.metrics,
        }
    }
}

/// 서버 → 클라이언트 메시지
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "METRIC_DATA")]
    MetricData {
        metric: String,
        guid: SessionToken,
        data: String,
    },
    #[serde(rename = "METRIC_BATCH_END")]
    MetricBatchEnd { guid: SessionToken },
    /// 이 클라이언트가 다루지 않는 메시지
    #[serde(other)]
    Other,
}

impl ServerMessage {
    /// 스토어 명령으로 변환 (다루지 않는 메시지는 None)
    pub fn into_command(self) -> Option<StoreCommand> {
        match self {
            Self::MetricData { metric, guid, data } => Some(StoreCommand::MetricData {
                metric,
                token: guid,
                data,
            }),
            Self::MetricBatchEnd { guid } => Some(StoreCommand::BatchFinished { token: guid }),
            Self::Other => None,
        }
    }
}

/// 구독 요청 인코딩
pub fn encode_subscribe(request: &SubscriptionRequest) -> Result<String, CoreError> {
    Ok(serde_json::to_string(&ClientMessage::from(request))?)
}

/// 텍스트 프레임 → 스토어 명령. 다루지 않는 메시지 타입은 `Ok(None)`.
pub fn decode_server_message(text: &str) -> Result<Option<StoreCommand>, CoreError> {
    let message: ServerMessage =
        serde_json::from_str(text).map_err(|e| CoreError::Protocol(e.to_string()))?;
    Ok(message.into_command())
}
