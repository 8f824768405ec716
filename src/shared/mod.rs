/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 共有設定管理（環境・静的参照データ）
pub mod config;

/// 共有ユーティリティ関数
pub mod utils;

// 便利な再エクスポート
pub use config::{
    all_country_rates, find_country_rate, get_environment, initialize_logging_system,
    tax_rates_2024_2025, CountryRate, Environment, EnvironmentConfig, TaxRateSnapshot,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
