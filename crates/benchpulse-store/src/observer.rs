//! 변경 알림 콜백 레지스트리.
//!
//! 알림에는 페이로드가 없다. 관찰자는 알림을 받은 뒤 스토어 읽기 접근자로
//! 필요한 데이터를 조회한다. 알림 중에는 스냅샷을 순회하므로 콜백 안에서
//! 관찰자를 추가/제거해도 안전하다.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

/// 변경 콜백
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// 등록 해제용 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: BTreeMap<ObserverId, ChangeCallback>,
}

/// 관찰자 레지스트리 (복제 시 같은 레지스트리 공유)
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 콜백 등록
    pub fn add<F>(&self, callback: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = ObserverId(inner.next_id);
        inner.next_id += 1;
        inner.callbacks.insert(id, Arc::new(callback));
        id
    }

    /// 콜백 해제. 이미 없으면 false.
    pub fn remove(&self, id: ObserverId) -> bool {
        self.inner.lock().callbacks.remove(&id).is_some()
    }

    /// 등록된 모든 콜백을 한 번씩 호출
    pub fn notify(&self) {
        let snapshot: Vec<ChangeCallback> = self.inner.lock().callbacks.values().cloned().collect();
        trace!("변경 알림: 관찰자 {}개", snapshot.len());
        for callback in snapshot {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notify_reaches_every_observer_once() {
        let registry = ObserverRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            registry.add(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }

        registry.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn removed_observer_is_not_called() {
        let registry = ObserverRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        let id = registry.add(move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        registry.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn removal_during_notify_is_safe() {
        let registry = ObserverRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<ObserverId>>> = Arc::new(Mutex::new(None));

        let reg = registry.clone();
        let s = slot.clone();
        let h = hits.clone();
        let id = registry.add(move || {
            h.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *s.lock() {
                reg.remove(id);
            }
        });
        *slot.lock() = Some(id);

        registry.notify();
        registry.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }
}
