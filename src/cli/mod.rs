// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod runner;

// 公開API
pub use args::{Cli, Commands};
pub use runner::{build_engine, resolve_scenario, run};
