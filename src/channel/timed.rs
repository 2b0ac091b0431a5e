// TimedReceiver - 期限付き受信
// タイムアウトはその回の待機を打ち切るだけで、送信側には影響しない

use super::handles::QueueReceiver;
use crate::core::ReceiveOutcome;
use std::time::Duration;
use tracing::trace;

/// 受信とタイマーを競争させる
///
/// タイムアウトしてもアイテムは失われず、後続の呼び出しで受信できる。
/// タイマーは呼び出しごとに新しく作られる。
pub async fn receive_with_timeout<T>(
    receiver: &QueueReceiver<T>,
    duration: Duration,
) -> ReceiveOutcome<T> {
    match tokio::time::timeout(duration, receiver.recv()).await {
        Ok(Some(item)) => ReceiveOutcome::Received(item),
        Ok(None) => ReceiveOutcome::Closed,
        Err(_) => {
            trace!(?duration, "receive timed out");
            ReceiveOutcome::TimedOut
        }
    }
}

/// 固定の期限を持つレシーバー
pub struct TimedReceiver<T> {
    receiver: QueueReceiver<T>,
    timeout: Duration,
}

impl<T> TimedReceiver<T> {
    pub fn new(receiver: QueueReceiver<T>, timeout: Duration) -> Self {
        Self { receiver, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn recv(&self) -> ReceiveOutcome<T> {
        receive_with_timeout(&self.receiver, self.timeout).await
    }

    pub fn into_inner(self) -> QueueReceiver<T> {
        self.receiver
    }
}
