//! 애플리케이션 설정 구조체.
//!
//! 서버 WebSocket 주소, 연결 타임아웃, 스토어 명령 큐 크기 등
//! 런타임 설정을 정의한다. `ConfigManager`를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 서버 연결 설정
    pub server: ServerConfig,
    /// 메트릭 스토어 설정
    #[serde(default)]
    pub store: StoreConfig,
}

/// 서버 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// WebSocket 엔드포인트 (예: "ws://localhost:4800/ws")
    pub ws_url: String,
    /// 연결 타임아웃 (밀리초)
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

/// 메트릭 스토어 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 스토어 액터 명령 큐 용량
    #[serde(default = "default_command_queue_capacity")]
    pub command_queue_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            command_queue_capacity: default_command_queue_capacity(),
        }
    }
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_command_queue_capacity() -> usize {
    256
}

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                ws_url: "ws://localhost:4800/ws".to_string(),
                connect_timeout_ms: default_connect_timeout_ms(),
            },
            store: StoreConfig::default(),
        }
    }

    /// 연결 타임아웃 Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.server.connect_timeout_ms)
    }
}
