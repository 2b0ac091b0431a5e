// BoundedQueue - 固定容量のFIFOキュー
// 複数プロデューサー・複数コンシューマーとクローズプロトコルを提供

use crate::core::{QueueError, TryDequeueError};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::{Notify, Semaphore};
use tracing::{debug, trace};

/// 固定容量のFIFOキュー
///
/// - `enqueue` は満杯の間サスペンドする（バックプレッシャー）
/// - `dequeue` は空かつオープンの間サスペンドし、クローズ済みかつ空で `None` を返す
/// - `close` はちょうど1回だけ呼ぶ。2回目は `QueueError::DoubleClose`
///
/// 容量0はランデブー。`enqueue` はコンシューマーが取り出すまで戻らない。
/// 受け渡し中の1件はバッファ容量には数えない。
pub struct BoundedQueue<T> {
    capacity: usize,
    state: Mutex<QueueState<T>>,
    // 空きスロット。クローズ時にcloseして待機中のエンキューを起こす
    slots: Semaphore,
    item_ready: Notify,
    taken: Notify,
}

struct QueueState<T> {
    buffer: VecDeque<T>,
    closed: bool,
    peak: usize,
    enqueued: u64,
    dequeued: u64,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(QueueState {
                buffer: VecDeque::with_capacity(capacity.max(1)),
                closed: false,
                peak: 0,
                enqueued: 0,
                dequeued: 0,
            }),
            slots: Semaphore::new(capacity.max(1)),
            item_ready: Notify::new(),
            taken: Notify::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 現在バッファにあるアイテム数
    pub fn len(&self) -> usize {
        self.lock_state().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().buffer.is_empty()
    }

    /// これまでにバッファが保持した最大件数
    ///
    /// 容量0では受け渡し中の1件が数えられる。
    pub fn peak_len(&self) -> usize {
        self.lock_state().peak
    }

    pub fn is_closed(&self) -> bool {
        self.lock_state().closed
    }

    /// アイテムを末尾に追加する
    ///
    /// 満杯ならスロットが空くまで待機する。クローズ後は `QueueError::Closed`。
    pub async fn enqueue(&self, item: T) -> Result<(), QueueError> {
        let permit = self.slots.acquire().await.map_err(|_| QueueError::Closed)?;

        let ticket = {
            let mut state = self.lock_state();
            if state.closed {
                return Err(QueueError::Closed);
            }
            // スロットはデキュー側でadd_permitsにより返却する
            permit.forget();
            state.buffer.push_back(item);
            state.peak = state.peak.max(state.buffer.len());
            state.enqueued += 1;
            state.enqueued
        };
        self.item_ready.notify_one();

        if self.capacity == 0 {
            self.wait_taken(ticket).await;
        }
        Ok(())
    }

    /// 先頭のアイテムを取り出す
    ///
    /// クローズ済みかつ空になったら `None`。
    /// キャンセルしてもアイテムは失われない（取り出しはロック内で完結する）。
    pub async fn dequeue(&self) -> Option<T> {
        loop {
            let notified = self.item_ready.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            match self.try_dequeue() {
                Ok(item) => return Some(item),
                Err(TryDequeueError::Closed) => return None,
                Err(TryDequeueError::Empty) => {}
            }

            notified.await;
        }
    }

    /// サスペンドせずに取り出す
    pub fn try_dequeue(&self) -> Result<T, TryDequeueError> {
        let item = {
            let mut state = self.lock_state();
            match state.buffer.pop_front() {
                Some(item) => {
                    state.dequeued += 1;
                    item
                }
                None if state.closed => return Err(TryDequeueError::Closed),
                None => return Err(TryDequeueError::Empty),
            }
        };

        self.slots.add_permits(1);
        if self.capacity == 0 {
            self.taken.notify_waiters();
        }
        Ok(item)
    }

    /// キューをクローズする
    ///
    /// 待機中のコンシューマーを全て起こす。残っているアイテムは引き続き取り出せる。
    pub fn close(&self) -> Result<(), QueueError> {
        let remaining = {
            let mut state = self.lock_state();
            if state.closed {
                return Err(QueueError::DoubleClose);
            }
            state.closed = true;
            state.buffer.len()
        };

        self.slots.close();
        self.item_ready.notify_waiters();
        debug!(remaining, "bounded queue closed");
        Ok(())
    }

    async fn wait_taken(&self, ticket: u64) {
        loop {
            let notified = self.taken.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let handed_off = self.lock_state().dequeued >= ticket;
            if handed_off {
                trace!(ticket, "rendezvous handoff completed");
                return;
            }

            notified.await;
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
