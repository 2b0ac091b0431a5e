// 統合テストのエントリーポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_fan_in;
mod test_main_entry_point;
mod test_queue_pipeline;
