// 作業シミュレーション
// プロデューサー・コンシューマー・ワーカーの休止時間を注入可能にする

pub mod implementations;

// 公開API
pub use implementations::{FixedWorkSimulator, RandomWorkSimulator};
