use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long the "copied" indicator stays on
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Transient "copied" flag reset by a one-shot timer.
///
/// Every [`trigger`](Self::trigger) schedules its own reset; earlier resets
/// are not cancelled, so the flag clears `duration` after the first trigger
/// of a burst.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    copied: Arc<AtomicBool>,
    duration: Duration,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::with_duration(COPY_FEEDBACK_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            copied: Arc::new(AtomicBool::new(false)),
            duration,
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    pub fn trigger(&self) {
        self.copied.store(true, Ordering::SeqCst);

        let flag = Arc::clone(&self.copied);
        let duration = self.duration;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    flag.store(false, Ordering::SeqCst);
                });
            }
            // Hosts without a runtime
            Err(_) => {
                std::thread::spawn(move || {
                    std::thread::sleep(duration);
                    flag.store(false, Ordering::SeqCst);
                });
            }
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}
