// 日当計算機能のデータモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 出張期間データモデル
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPeriod {
    /// 出張開始日時
    pub start_datetime: DateTime<Utc>,
    /// 予定終了日時（計画段階では未定の場合あり）
    pub planned_end_datetime: Option<DateTime<Utc>>,
    /// 実終了日時（締め処理後にのみ存在）
    pub actual_end_datetime: Option<DateTime<Utc>>,
}

/// 日当計算モード（終了日時の選択規則）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietMode {
    /// 進行中: 終了日時は「現在時刻」。呼び出しごとに結果が変わる
    /// （壁時計依存・非冪等。キャッシュ不可、残高参照のたびに再計算する）
    Live,
    /// 計画段階: 予定終了日時を使用。未設定ならエラー
    Planned,
    /// 締め済み: 実終了日時を使用。未設定ならエラー
    Closed,
}

/// 日当レート（出張作成時の国別レート表から凍結コピーされる）
///
/// daily_rateとcurrencyは作成後不変。breakfast_countのみ
/// 締め処理まで更新可能
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietRate {
    /// 1日あたりの日当額
    pub daily_rate: f64,
    /// 通貨コード
    pub currency: String,
    /// 提供された朝食の回数（1回につき日当の1/4を控除）
    pub breakfast_count: u32,
}

/// 日当計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietResult {
    /// 丸1日（24時間ブロック）の数
    pub full_days: u32,
    /// 端数時間に対する係数 {0, 1/3, 1/2, 1}
    pub partial_day_multiplier: f64,
    /// 日数合計（丸1日数 + 端数係数）
    pub total_days: f64,
    /// 朝食控除前の日当総額
    pub diet_before_breakfast: f64,
    /// 朝食控除額（日当総額を超えない）
    pub breakfast_deduction: f64,
    /// 最終的な日当額（0以上）
    pub total_diet: f64,
    /// 通貨コード
    pub currency: String,
    /// 日別の内訳（監査用の表示行）
    pub breakdown: Vec<String>,
    /// 補足メッセージ（未開始時など）
    pub message: Option<String>,
}

impl DietResult {
    /// 全フィールドが0の結果を作成する（未開始状態用）
    ///
    /// # 引数
    /// * `currency` - 通貨コード
    /// * `message` - 未開始理由の説明メッセージ
    pub fn zero(currency: &str, message: String) -> Self {
        Self {
            full_days: 0,
            partial_day_multiplier: 0.0,
            total_days: 0.0,
            diet_before_breakfast: 0.0,
            breakfast_deduction: 0.0,
            total_diet: 0.0,
            currency: currency.to_string(),
            breakdown: Vec::new(),
            message: Some(message),
        }
    }
}
