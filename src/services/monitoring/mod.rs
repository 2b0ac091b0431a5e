// 進捗監視機能
// 生成・処理・受信・タイムアウトの通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter, RecordingReporter};
