//! # benchpulse-app
//!
//! BenchPulse 클라이언트 바이너리 진입점.
//! 설정 로드, 어댑터 와이어링, 스토어 액터 실행, 종료 처리.

mod lifecycle;
mod report;

use anyhow::{Context, Result};
use benchpulse_core::config::AppConfig;
use benchpulse_core::config_manager::ConfigManager;
use benchpulse_core::models::session::{BenchId, SessionToken};
use benchpulse_network::feed::pump_messages;
use benchpulse_network::subscription::WsSubscriptionClient;
use benchpulse_network::ws_client::WsClient;
use benchpulse_store::actor::StoreActor;
use benchpulse_store::store::MetricsStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::lifecycle::{shutdown_signal, IngestionRuntime, StopReason};

/// 실행 중인 벤치마크의 메트릭을 실시간으로 수집한다
#[derive(Parser, Debug)]
#[command(name = "benchpulse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 벤치마크 ID
    #[arg(long, short = 'b')]
    bench: u64,

    /// 구독할 메트릭 (쉼표 구분)
    #[arg(long, short = 'm', value_delimiter = ',', required = true)]
    metrics: Vec<String>,

    /// 기존 세션 토큰 (지정하면 새 토큰 대신 해당 세션을 재개)
    #[arg(long)]
    token: Option<String>,

    /// WebSocket 서버 URL (기본: 설정 파일 값)
    #[arg(long, short = 's')]
    server: Option<String>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// 설정 로드. 실패하면 기본값으로 계속 진행한다.
fn load_config(path: Option<PathBuf>) -> AppConfig {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    match manager {
        Ok(manager) => {
            info!("설정 파일: {}", manager.config_path().display());
            manager.get()
        }
        Err(e) => {
            warn!("설정 로드 실패, 기본값 사용: {e}");
            AppConfig::default_config()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "benchpulse={level},benchpulse_core={level},benchpulse_store={level},benchpulse_network={level}",
        level = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let mut config = load_config(args.config);
    if let Some(server) = args.server {
        config.server.ws_url = server;
    }

    // 1. 서버 연결
    let ws = WsClient::new(&config.server.ws_url, config.connect_timeout());
    let (sender, inbound) = ws
        .connect()
        .await
        .with_context(|| format!("서버 연결 실패: {}", ws.url()))?;

    // 2. 스토어 액터 + 수신 펌프
    let client = Arc::new(WsSubscriptionClient::new(sender.clone()));
    let (actor, handle) = StoreActor::new(
        MetricsStore::new(),
        client,
        config.store.command_queue_capacity,
    );
    let mut runtime = IngestionRuntime::new(
        tokio::spawn(actor.run()),
        tokio::spawn(pump_messages(inbound, handle.sender())),
    );

    // 3. 변경 알림 → 요약 로그
    let view = handle.view();
    let metrics = args.metrics.clone();
    handle.on_change(move || {
        for summary in report::summarize(&view, &metrics) {
            info!("{summary}");
        }
    });

    // 4. 세션 시작 + 구독
    let bench_id = BenchId(args.bench);
    match args.token {
        Some(token) => {
            handle
                .change_session(bench_id, SessionToken::new(token))
                .await?
        }
        None => handle.reset_subscriptions(bench_id).await?,
    }
    handle.subscribe_metrics(args.metrics).await?;

    // 5. 시그널 또는 서버 종료까지 대기
    let stop = async {
        if let Err(e) = shutdown_signal().await {
            // 시그널을 못 받으면 서버 스트림 종료만 기다린다
            warn!("시그널 핸들러 등록 실패: {e}");
            std::future::pending::<()>().await;
        }
    };
    match runtime.run_until(stop).await {
        StopReason::Requested => info!("종료 요청 수신"),
        StopReason::StreamEnded { forwarded } => {
            info!("서버 스트림 종료 (전달 명령 {forwarded}개)");
        }
    }

    // 6. 정리: 연결 종료 → 펌프 중단 → 액터가 남은 명령 처리 후 종료
    if let Err(e) = sender.close().await {
        warn!("연결 종료 실패: {e}");
    }
    runtime.shutdown(handle).await.context("스토어 액터 비정상 종료")?;

    info!("BenchPulse 종료");
    Ok(())
}
