//! 수집 세션 실행/종료 관리.
//!
//! 스토어 액터와 수신 펌프 태스크를 소유한다. 종료 요청이나 서버 스트림 종료를
//! 기다린 뒤 펌프 중단 → 핸들 해제 → 액터 drain 순서로 정리한다.

use benchpulse_store::actor::StoreHandle;
use std::future::Future;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// 대기 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 종료 요청 (시그널)
    Requested,
    /// 서버 스트림 종료. 펌프가 전달한 명령 수.
    StreamEnded { forwarded: usize },
}

pub struct IngestionRuntime {
    actor_task: JoinHandle<()>,
    pump_task: JoinHandle<usize>,
}

impl IngestionRuntime {
    pub fn new(actor_task: JoinHandle<()>, pump_task: JoinHandle<usize>) -> Self {
        Self {
            actor_task,
            pump_task,
        }
    }

    /// `stop`이 완료되거나 펌프가 끝날 때까지 대기
    pub async fn run_until<F>(&mut self, stop: F) -> StopReason
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            _ = stop => StopReason::Requested,
            forwarded = &mut self.pump_task => StopReason::StreamEnded {
                forwarded: forwarded.unwrap_or(0),
            },
        }
    }

    /// 펌프 중단 후 마지막 핸들을 놓고 액터가 남은 명령을 처리하고 끝나기를 기다린다.
    ///
    /// `handle` 외에 살아 있는 `StoreHandle`이 있으면 액터는 끝나지 않는다.
    pub async fn shutdown(self, handle: StoreHandle) -> Result<(), JoinError> {
        self.pump_task.abort();
        drop(handle);
        self.actor_task.await?;
        info!("스토어 액터 정리 완료");
        Ok(())
    }
}

/// SIGINT/SIGTERM (unix) 또는 Ctrl+C 대기
pub async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            _ = sigint.recv() => info!("SIGINT 수신"),
            _ = sigterm.recv() => info!("SIGTERM 수신"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        info!("Ctrl+C 수신");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use benchpulse_core::error::CoreError;
    use benchpulse_core::models::session::BenchId;
    use benchpulse_core::models::subscription::SubscriptionRequest;
    use benchpulse_core::ports::subscription::SubscriptionClient;
    use benchpulse_store::actor::{StoreActor, StoreHandle};
    use benchpulse_store::store::MetricsStore;
    use std::sync::Arc;
    use tokio::sync::oneshot;

    struct NoopClient;

    #[async_trait]
    impl SubscriptionClient for NoopClient {
        async fn subscribe(&self, _request: &SubscriptionRequest) -> Result<(), CoreError> {
            Ok(())
        }
    }

    fn spawn_actor() -> (JoinHandle<()>, StoreHandle) {
        let (actor, handle) = StoreActor::new(MetricsStore::new(), Arc::new(NoopClient), 8);
        (tokio::spawn(actor.run()), handle)
    }

    #[tokio::test]
    async fn pump_end_stops_wait() {
        let (actor_task, handle) = spawn_actor();
        let mut runtime = IngestionRuntime::new(actor_task, tokio::spawn(async { 3 }));

        let reason = runtime.run_until(std::future::pending()).await;
        assert_eq!(reason, StopReason::StreamEnded { forwarded: 3 });

        runtime.shutdown(handle).await.unwrap();
    }

    #[tokio::test]
    async fn stop_request_interrupts_running_pump() {
        let (actor_task, handle) = spawn_actor();
        let pump = tokio::spawn(std::future::pending::<usize>());
        let mut runtime = IngestionRuntime::new(actor_task, pump);

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        stop_tx.send(()).unwrap();
        let reason = runtime
            .run_until(async {
                let _ = stop_rx.await;
            })
            .await;
        assert_eq!(reason, StopReason::Requested);

        runtime.shutdown(handle).await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_drains_queued_commands() {
        let (actor_task, handle) = spawn_actor();
        let view = handle.view();
        let runtime = IngestionRuntime::new(actor_task, tokio::spawn(async { 0 }));

        handle.reset_subscriptions(BenchId(5)).await.unwrap();
        runtime.shutdown(handle).await.unwrap();

        assert_eq!(view.current_bench_id(), Some(BenchId(5)));
    }
}
