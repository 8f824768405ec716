// 書類重複判定機能のデータモデル

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OCR/AI抽出された書類フィールド
///
/// 抽出パイプラインは失敗・部分的な抽出があり得るため全て任意。
/// フィールドが欠けている場合は対応する判定戦略だけが無効になる
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFields {
    /// 請求書番号
    pub invoice_number: Option<String>,
    /// 金額
    pub amount: Option<f64>,
    /// 発行日
    pub issue_date: Option<NaiveDate>,
    /// 仕入先名
    pub vendor_name: Option<String>,
}

/// 永続化済みの既存書類（同一所有者のもの）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// 書類ID
    pub id: i64,
    /// 抽出済みフィールド
    pub fields: DocumentFields,
    /// 保存済みの指紋ハッシュ（抽出が不完全な場合はなし）
    pub fingerprint: Option<String>,
}

/// 一致の確信度（昇順に定義。Exactが最も強い）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// 低（請求書番号のみ一致）
    Low,
    /// 中（金額一致 + 日付±1日）
    Medium,
    /// 高（金額一致 + 日付完全一致）
    High,
    /// 完全（指紋一致）
    Exact,
}

/// 推奨アクション（緊急度の昇順に定義）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// 新規書類として登録
    AddNew,
    /// 人による確認が必要
    Review,
    /// 既存書類に統合
    Merge,
}

/// 1候補との一致結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateMatch {
    /// 一致した既存書類のID
    pub document_id: i64,
    /// 類似度スコア [0, 1]
    pub similarity: f64,
    /// 確信度
    pub confidence: MatchConfidence,
}

/// 重複判定の最終結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCheckResult {
    /// 重複候補が1件でも見つかったか
    pub is_duplicate: bool,
    /// 最良一致の確信度（一致なしの場合はなし）
    pub best_confidence: Option<MatchConfidence>,
    /// 一致した書類（類似度の降順）
    pub matched_documents: Vec<DuplicateMatch>,
    /// 最良一致の確信度から導かれる推奨アクション
    pub suggested_action: SuggestedAction,
}
