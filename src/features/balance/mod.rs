//! 精算残高機能モジュール
//!
//! 前払金・経費・宿泊費上限判定・日当を集計して出張の精算残高を
//! 算出します。残高の符号が精算方向（会社→出張者 / 出張者→会社）の
//! 唯一の基準です。

pub mod models;
pub mod service;

// 公開インターフェース
pub use models::{
    Advance, CategoryTotals, HotelStatus, ProjectBalance, Transaction, TransactionCategory,
    TripStatus,
};
pub use service::calculate_project_balance;
