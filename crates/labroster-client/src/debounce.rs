//! Click-spam protection for user-triggered actions.
//!
//! A [`Debounced`] action runs at most once per cooldown window: while busy,
//! further calls are dropped. The busy flag clears after the cooldown on the
//! tokio timer whether the action succeeded, failed, or was cancelled.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2000);

/// An input event whose default handling can be suppressed.
pub trait UiEvent {
    fn prevent_default(&mut self);
}

/// Busy flag plus cooldown, shareable across tasks.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    busy: Arc<AtomicBool>,
    cooldown: Duration,
}

impl CooldownGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            busy: Arc::new(AtomicBool::new(false)),
            cooldown,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Run `action` unless the gate is busy. `None` means the call was dropped.
    pub async fn run<F, Fut>(&self, action: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("action dropped while cooling down");
            return None;
        }

        let _release = Release {
            busy: Arc::clone(&self.busy),
            cooldown: self.cooldown,
        };
        Some(action().await)
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

// Schedules the busy reset when the action finishes or is dropped.
struct Release {
    busy: Arc<AtomicBool>,
    cooldown: Duration,
}

impl Drop for Release {
    fn drop(&mut self) {
        let busy = Arc::clone(&self.busy);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let cooldown = self.cooldown;
                handle.spawn(async move {
                    tokio::time::sleep(cooldown).await;
                    busy.store(false, Ordering::Release);
                });
            }
            Err(_) => busy.store(false, Ordering::Release),
        }
    }
}

/// An async callback guarded by its own [`CooldownGate`].
pub struct Debounced<F> {
    callback: F,
    gate: CooldownGate,
}

impl<F, Fut> Debounced<F>
where
    F: Fn() -> Fut,
    Fut: Future,
{
    pub fn new(callback: F) -> Self {
        Self::with_cooldown(callback, DEFAULT_COOLDOWN)
    }

    pub fn with_cooldown(callback: F, cooldown: Duration) -> Self {
        Self {
            callback,
            gate: CooldownGate::new(cooldown),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Suppress the event's default handling, then run the callback unless a
    /// previous call is still cooling down.
    pub async fn call(&self, event: Option<&mut (dyn UiEvent + Send)>) -> Option<Fut::Output> {
        if let Some(event) = event {
            event.prevent_default();
        }
        self.gate.run(|| (self.callback)()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct Click {
        prevented: bool,
    }

    impl UiEvent for Click {
        fn prevent_default(&mut self) {
            self.prevented = true;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_within_cooldown_is_dropped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let action = Debounced::new(move || {
            let counter = Arc::clone(&counter);
            async move { counter.fetch_add(1, Ordering::SeqCst) }
        });

        assert_eq!(action.call(None).await, Some(0));
        assert!(action.is_busy());
        assert_eq!(action.call(None).await, None);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(action.call(None).await, None);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!action.is_busy());
        assert_eq!(action.call(None).await, Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_calls_run_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let action = Debounced::new(move || {
            let counter = Arc::clone(&counter);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                counter.fetch_add(1, Ordering::SeqCst)
            }
        });

        let (first, second) = futures::join!(action.call(None), action.call(None));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!([first, second].iter().filter(|r| r.is_some()).count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_applies_after_failure() {
        let action = Debounced::new(|| async { Err::<(), &str>("backend down") });

        assert_eq!(action.call(None).await, Some(Err("backend down")));
        assert_eq!(action.call(None).await, None);

        tokio::time::sleep(DEFAULT_COOLDOWN + Duration::from_millis(1)).await;
        assert!(action.call(None).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_default_is_prevented_even_when_dropped() {
        let action = Debounced::new(|| async {});
        let mut first = Click::default();
        let mut second = Click::default();

        assert!(action.call(Some(&mut first)).await.is_some());
        assert!(action.call(Some(&mut second)).await.is_none());
        assert!(first.prevented);
        assert!(second.prevented);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_do_not_share_busy_state() {
        let a = Debounced::new(|| async { "a" });
        let b = Debounced::new(|| async { "b" });

        assert_eq!(a.call(None).await, Some("a"));
        assert_eq!(b.call(None).await, Some("b"));
    }

    #[test]
    fn test_release_without_runtime_clears_immediately() {
        let gate = CooldownGate::default();
        let result = futures::executor::block_on(gate.run(|| async { 7 }));
        assert_eq!(result, Some(7));
        assert!(!gate.is_busy());
    }
}
