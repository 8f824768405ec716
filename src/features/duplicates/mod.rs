//! 書類重複判定機能モジュール
//!
//! OCR/AI抽出後の領収書・請求書を既存書類と突き合わせ、指紋一致・
//! 金額日付一致・請求書番号一致の多段戦略で重複候補を採点します。
//! 抽出の部分的な失敗には戦略の縮退で対応し、エラーにはしません。

pub mod fingerprint;
pub mod models;
pub mod service;

// 公開インターフェース
pub use fingerprint::compute_fingerprint;
pub use models::{
    DocumentFields, DuplicateCheckResult, DuplicateMatch, MatchConfidence, StoredDocument,
    SuggestedAction,
};
pub use service::check_duplicate;
