//! 日当計算機能モジュール
//!
//! 出張期間と凍結済みレートから法定日当（滞在日当）を算出します。
//! 丸1日単位の計上、端数時間の係数規則、提供朝食による控除を扱います。

pub mod models;
pub mod service;

// 公開インターフェース
pub use models::{DietMode, DietRate, DietResult, TripPeriod};
pub use service::calculate_diet;
