//! 스토어 액터.
//!
//! 명령 큐(`tokio::mpsc`)를 소비하는 단일 소유자. 모든 변경 연산은
//! 이 루프 안에서 순서대로 끝까지 실행되므로 기준 시각 고정과 테이블 비우기가
//! 서로 끼어들지 않는다. 읽기 접근자는 `StoreHandle`을 통해 언제든 호출할 수 있다.

use benchpulse_core::error::CoreError;
use benchpulse_core::models::command::StoreCommand;
use benchpulse_core::models::observation::Observation;
use benchpulse_core::models::session::{BenchId, SessionToken};
use benchpulse_core::ports::subscription::SubscriptionClient;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::observer::{ObserverId, ObserverRegistry};
use crate::store::MetricsStore;

/// 명령 큐 소비자
pub struct StoreActor {
    rx: mpsc::Receiver<StoreCommand>,
    state: Arc<RwLock<MetricsStore>>,
    observers: ObserverRegistry,
    client: Arc<dyn SubscriptionClient>,
}

impl StoreActor {
    /// 액터와 핸들 생성
    pub fn new(
        store: MetricsStore,
        client: Arc<dyn SubscriptionClient>,
        capacity: usize,
    ) -> (Self, StoreHandle) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let state = Arc::new(RwLock::new(store));
        let observers = ObserverRegistry::new();

        let handle = StoreHandle {
            tx,
            view: StoreView {
                state: state.clone(),
                observers: observers.clone(),
            },
        };
        let actor = Self {
            rx,
            state,
            observers,
            client,
        };
        (actor, handle)
    }

    /// 모든 송신자가 닫힐 때까지 명령 처리
    pub async fn run(mut self) {
        info!("메트릭 스토어 액터 시작");
        while let Some(command) = self.rx.recv().await {
            self.handle(command).await;
        }
        info!("메트릭 스토어 액터 종료");
    }

    /// 명령 하나 처리. 쓰기 락을 놓은 뒤에 관찰자에게 알린다.
    pub async fn handle(&self, command: StoreCommand) {
        debug!("명령 처리: {}", command.kind());

        let changed = match command {
            StoreCommand::SubscribeMetrics { metrics } => {
                self.subscribe(metrics).await;
                false
            }
            StoreCommand::MetricData {
                metric,
                token,
                data,
            } => {
                self.state.write().ingest(&metric, &token, &data);
                true
            }
            StoreCommand::BatchFinished { token } => self.state.write().mark_batch_finished(&token),
            StoreCommand::ResetSubscriptions { bench_id } => {
                self.state.write().reset_subscriptions(bench_id);
                true
            }
            StoreCommand::ChangeSession { bench_id, token } => {
                self.state.write().change_session(bench_id, token);
                true
            }
        };

        if changed {
            self.observers.notify();
        }
    }

    async fn subscribe(&self, metrics: BTreeSet<String>) {
        let request = self.state.read().subscription_request(metrics);
        if let Err(e) = self.client.subscribe(&request).await {
            warn!("메트릭 구독 요청 실패: {e}");
        }
    }
}

/// 스토어 핸들 — 명령 송신 + 읽기 접근자 + 관찰자 등록.
///
/// 핸들이 하나라도 살아 있으면 액터는 종료되지 않는다.
/// 읽기만 필요한 곳(관찰자 콜백 등)에는 [`StoreView`]를 넘긴다.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreCommand>,
    view: StoreView,
}

impl StoreHandle {
    /// 명령 전송
    pub async fn send(&self, command: StoreCommand) -> Result<(), CoreError> {
        self.tx.send(command).await.map_err(|e| {
            CoreError::ChannelClosed(format!("스토어 명령 전송 실패: {}", e.0.kind()))
        })
    }

    /// 네트워크 어댑터 등 외부 생산자용 송신자
    pub fn sender(&self) -> mpsc::Sender<StoreCommand> {
        self.tx.clone()
    }

    /// 액터 수명에 영향을 주지 않는 읽기 전용 뷰
    pub fn view(&self) -> StoreView {
        self.view.clone()
    }

    pub async fn subscribe_metrics<I, S>(&self, metrics: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metrics = metrics.into_iter().map(Into::into).collect();
        self.send(StoreCommand::SubscribeMetrics { metrics }).await
    }

    pub async fn reset_subscriptions(&self, bench_id: BenchId) -> Result<(), CoreError> {
        self.send(StoreCommand::ResetSubscriptions { bench_id }).await
    }

    pub async fn change_session(
        &self,
        bench_id: BenchId,
        token: SessionToken,
    ) -> Result<(), CoreError> {
        self.send(StoreCommand::ChangeSession { bench_id, token }).await
    }

    pub fn current_bench_id(&self) -> Option<BenchId> {
        self.view.current_bench_id()
    }

    pub fn current_token(&self) -> SessionToken {
        self.view.current_token()
    }

    pub fn series(&self, metric: &str) -> Vec<Observation> {
        self.view.series(metric)
    }

    pub fn max_relative_date(&self, metric: &str) -> i64 {
        self.view.max_relative_date(metric)
    }

    pub fn is_loaded(&self) -> bool {
        self.view.is_loaded()
    }

    pub fn on_change<F>(&self, callback: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.view.on_change(callback)
    }

    pub fn off_change(&self, id: ObserverId) -> bool {
        self.view.off_change(id)
    }
}

/// 읽기 전용 스토어 뷰
#[derive(Clone)]
pub struct StoreView {
    state: Arc<RwLock<MetricsStore>>,
    observers: ObserverRegistry,
}

impl StoreView {
    pub fn current_bench_id(&self) -> Option<BenchId> {
        self.state.read().current_bench_id()
    }

    pub fn current_token(&self) -> SessionToken {
        self.state.read().current_token().clone()
    }

    /// 시계열 복제본. 없는 메트릭이면 빈 Vec.
    pub fn series(&self, metric: &str) -> Vec<Observation> {
        self.state.read().series(metric).to_vec()
    }

    pub fn max_relative_date(&self, metric: &str) -> i64 {
        self.state.read().max_relative_date(metric)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.read().is_loaded()
    }

    /// 읽기 락 안에서 스토어 조회
    pub fn read<R>(&self, f: impl FnOnce(&MetricsStore) -> R) -> R {
        f(&self.state.read())
    }

    /// 변경 알림 관찰자 등록
    pub fn on_change<F>(&self, callback: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observers.add(callback)
    }

    pub fn off_change(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }
}
