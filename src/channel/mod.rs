// チャンネル層 - 協調プリミティブ
// 有界キュー、クローズ権限の分離、完了カウンター、期限付き受信

pub mod bounded_queue;
pub mod completion;
pub mod handles;
pub mod timed;

// 公開API
pub use bounded_queue::BoundedQueue;
pub use completion::{CompletionCounter, CompletionGuard};
pub use handles::{channel, QueueCloser, QueueReceiver, QueueSender};
pub use timed::{receive_with_timeout, TimedReceiver};
