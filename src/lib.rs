//! 出張経費精算の計算コア
//!
//! 出張の生データ（期間・取引・前払金・申告給与）から、出張者と
//! 雇用者が必要とする数値を算出する決定的で副作用のない関数群:
//!
//! - 日当計算（[`features::diet`]）
//! - 精算残高計算（[`features::balance`]）
//! - 手取り給与計算（[`features::salary`]）
//! - 書類重複判定（[`features::duplicates`]）
//!
//! 4つのコンポーネントはいずれも純粋・同期・単一スレッドの計算であり、
//! 共有可変状態を持たないため複数リクエストから同時に呼び出しても安全です。
//! 唯一の時刻依存は日当計算のLIVEモードで、呼び出し時点のスナップショット
//! としてのみ有効です（キャッシュ不可）。

pub mod features;
pub mod shared;

// 便利な再エクスポート
pub use features::balance::{
    calculate_project_balance, Advance, CategoryTotals, HotelStatus, ProjectBalance, Transaction,
    TransactionCategory, TripStatus,
};
pub use features::diet::{calculate_diet, DietMode, DietRate, DietResult, TripPeriod};
pub use features::duplicates::{
    check_duplicate, compute_fingerprint, DocumentFields, DuplicateCheckResult, DuplicateMatch,
    MatchConfidence, StoredDocument, SuggestedAction,
};
pub use features::salary::{calculate_net_salary, ContractType, SalaryInput, SalaryResult};
pub use shared::config::{
    find_country_rate, initialize_logging_system, tax_rates_2024_2025, CountryRate,
    TaxRateSnapshot,
};
pub use shared::errors::{AppError, AppResult, ErrorSeverity};
