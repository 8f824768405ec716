//! 手取り給与計算機能モジュール
//!
//! 申告された総支給額からポーランドの契約形態別税制（ZUS・NFZ・PIT）に
//! 基づく手取り額の内訳を算出します。計算に使用した料率はスナップ
//! ショットとして結果に同梱され、法令改定が過去の記録に遡及しません。

pub mod models;
pub mod service;

// 公開インターフェース
pub use models::{ContractType, SalaryInput, SalaryResult};
pub use service::calculate_net_salary;
