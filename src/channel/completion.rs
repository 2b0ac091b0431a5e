// CompletionCounter - 未完了タスク数のカウンター
// 登録ごとにガードを返し、ガードのDropで1回だけ減算する

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::warn;

/// 未完了タスクを数えるカウンター
///
/// `register` で加算し、返された `CompletionGuard` のDropで減算する。
/// 早期リターンやパニックでもガードが破棄されれば必ず減算される。
#[derive(Debug, Clone, Default)]
pub struct CompletionCounter {
    inner: Arc<CounterInner>,
}

#[derive(Debug, Default)]
struct CounterInner {
    outstanding: AtomicUsize,
    zero: Notify,
}

impl CompletionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// タスクを1つ登録する
    pub fn register(&self) -> CompletionGuard {
        self.inner.outstanding.fetch_add(1, Ordering::AcqRel);
        CompletionGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// 未完了のタスク数
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }

    /// カウントが0になるまで待機する
    pub async fn wait(&self) {
        loop {
            let notified = self.inner.zero.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }

            notified.await;
        }
    }
}

/// 登録済みタスク1件分の完了ガード
#[derive(Debug)]
#[must_use = "ガードを破棄するとその場で完了扱いになる"]
pub struct CompletionGuard {
    inner: Arc<CounterInner>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let previous =
            self.inner
                .outstanding
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => self.inner.zero.notify_waiters(),
            Ok(_) => {}
            // 負にはしない
            Err(_) => warn!("completion counter released below zero"),
        }
    }
}
