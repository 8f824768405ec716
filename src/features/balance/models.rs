// 精算残高機能のデータモデル

use crate::features::diet::DietResult;
use serde::{Deserialize, Serialize};

/// 経費カテゴリ
///
/// カテゴリ追加時はコンパイルエラーで集計漏れを検出できるよう、
/// 文字列ではなく列挙型で網羅的にマッチさせる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// 食費
    Food,
    /// 交通費
    Transport,
    /// 宿泊費
    Hotel,
    /// 駐車料金
    Parking,
    /// 燃料費
    Fuel,
    /// その他
    Other,
}

/// 経費取引データモデル
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// 金額
    pub amount: f64,
    /// カテゴリ
    pub category: TransactionCategory,
    /// 私費フラグ（個人支出。集計には一切含めない）
    pub is_private: bool,
    /// プロジェクト除外フラグ（残高には含めないが一覧には表示される）
    pub excluded_from_project: bool,
    /// 摘要
    pub description: Option<String>,
}

impl Transaction {
    /// 残高集計の対象となる有効な取引かどうかを判定する
    ///
    /// # 戻り値
    /// 私費でもプロジェクト除外でもない場合にtrue
    pub fn is_valid_for_balance(&self) -> bool {
        !self.is_private && !self.excluded_from_project
    }
}

/// 前払金（出張前・出張中に出張者へ支給された金額。常に集計対象）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advance {
    /// 金額
    pub amount: f64,
    /// 摘要
    pub description: Option<String>,
}

/// 出張のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// 計画段階
    Planned,
    /// 進行中
    Active,
    /// 締め済み
    Closed,
}

/// 宿泊費上限に対する判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelStatus {
    /// 宿泊費なし
    NoHotel,
    /// 上限以内（上限と同額を含む）
    WithinLimit,
    /// 上限超過
    OverLimit,
}

/// カテゴリ別の経費合計
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub food: f64,
    pub transport: f64,
    pub hotel: f64,
    pub parking: f64,
    pub fuel: f64,
    pub other: f64,
}

impl CategoryTotals {
    /// 全カテゴリの合計を取得する
    pub fn total(&self) -> f64 {
        self.food + self.transport + self.hotel + self.parking + self.fuel + self.other
    }
}

/// 出張の精算残高
///
/// balanceの符号が精算方向の唯一の基準:
/// 正 = 会社が出張者に支払う、負 = 出張者が会社に返金する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBalance {
    /// 前払金合計
    pub advances_total: f64,
    /// 有効経費合計
    pub expenses_total: f64,
    /// カテゴリ別合計
    pub category_totals: CategoryTotals,
    /// 宿泊関連合計（宿泊費 + 駐車料金）
    pub hotel_combined: f64,
    /// 宿泊費上限（出張作成時に凍結）
    pub hotel_limit: f64,
    /// 宿泊費上限の判定結果
    pub hotel_status: HotelStatus,
    /// 上限超過額（0以上）
    pub hotel_overage: f64,
    /// 1日あたり平均経費（未開始の場合は0）
    pub average_daily_expense: f64,
    /// 日当計算結果
    pub diet: DietResult,
    /// 精算残高 = 前払金合計 − 経費合計 + 日当
    pub balance: f64,
}
