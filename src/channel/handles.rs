// キューハンドル - 送信・クローズ・受信の権限分離
// クローズ権限は複製できないQueueCloserだけが持つ

use super::bounded_queue::BoundedQueue;
use crate::core::{QueueError, TryDequeueError};
use std::sync::Arc;

/// 容量`capacity`のキューを作成し、3種類のハンドルに分割する
///
/// プロデューサーには `QueueSender` だけを渡し、
/// `QueueCloser` は最後のプロデューサーを待つコーディネーターが保持する。
pub fn channel<T>(capacity: usize) -> (QueueSender<T>, QueueCloser<T>, QueueReceiver<T>) {
    let queue = Arc::new(BoundedQueue::new(capacity));
    (
        QueueSender {
            queue: Arc::clone(&queue),
        },
        QueueCloser {
            queue: Arc::clone(&queue),
        },
        QueueReceiver { queue },
    )
}

/// 送信専用ハンドル
pub struct QueueSender<T> {
    queue: Arc<BoundedQueue<T>>,
}

impl<T> QueueSender<T> {
    /// 満杯ならサスペンドする
    pub async fn send(&self, item: T) -> Result<(), QueueError> {
        self.queue.enqueue(item).await
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

impl<T> Clone for QueueSender<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}

/// クローズ権限ハンドル
///
/// `close` は自身を消費するため、このハンドル経由の二重クローズは起こらない。
pub struct QueueCloser<T> {
    queue: Arc<BoundedQueue<T>>,
}

impl<T> QueueCloser<T> {
    pub fn close(self) -> Result<(), QueueError> {
        self.queue.close()
    }
}

/// 受信専用ハンドル
pub struct QueueReceiver<T> {
    queue: Arc<BoundedQueue<T>>,
}

impl<T> QueueReceiver<T> {
    /// クローズ済みかつ空なら `None`
    pub async fn recv(&self) -> Option<T> {
        self.queue.dequeue().await
    }

    pub fn try_recv(&self) -> Result<T, TryDequeueError> {
        self.queue.try_dequeue()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }

    /// バッファの最大保持件数
    pub fn peak_len(&self) -> usize {
        self.queue.peak_len()
    }
}

impl<T> Clone for QueueReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}
