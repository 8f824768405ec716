/// 環境設定とログ初期化
pub mod environment;

/// 国別日当レートの静的参照データ
pub mod country_rates;

/// 税率スナップショット
pub mod tax_rates;

// 便利な再エクスポート
pub use country_rates::{all_country_rates, find_country_rate, CountryRate};
pub use environment::{
    get_environment, initialize_logging_system, Environment, EnvironmentConfig,
};
pub use tax_rates::{tax_rates_2024_2025, TaxRateSnapshot};
