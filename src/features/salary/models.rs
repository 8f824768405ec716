// 手取り給与計算機能のデータモデル

use crate::shared::config::TaxRateSnapshot;
use crate::shared::errors::AppResult;
use serde::{Deserialize, Serialize};

/// 契約形態
///
/// ZUS方式の社会保険料を負担するのは雇用契約と業務委託契約のみ。
/// B2B・その他は計算式の対象外であり、明示的にエラーとして返す
/// （誤解を招く手取り額を黙って返してはならない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// 雇用契約（umowa o pracę）
    Employment,
    /// 業務委託契約（umowa zlecenie）
    CivilContract,
    /// 自営業者間取引（計算式の対象外）
    B2b,
    /// その他（計算式の対象外）
    Other,
}

impl ContractType {
    /// 表示用ラベルを取得する
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Employment => "EMPLOYMENT",
            ContractType::CivilContract => "CIVIL_CONTRACT",
            ContractType::B2b => "B2B",
            ContractType::Other => "OTHER",
        }
    }
}

/// 手取り給与計算の入力
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryInput {
    /// 申告された総支給額（グロス）
    pub gross: f64,
    /// 契約形態
    pub contract_type: ContractType,
    /// 疾病保険への任意加入フラグ
    pub voluntary_sickness_insurance: bool,
    /// PPK（積立年金制度）への加入フラグ
    pub ppk_enabled: bool,
    /// PPK拠出率（例: 0.02 = 2%）
    pub ppk_percentage: f64,
}

/// 手取り給与計算の結果
///
/// 全ての中間値は計算時点で小数第2位に丸められており、breakdownの
/// 表示行と1グロシュ単位で一致する。使用した料率スナップショットを
/// 結果と一緒に保持するため、後日の法令改定で締め済み出張の記録が
/// 変わることはない
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryResult {
    /// 総支給額
    pub gross: f64,
    /// 契約形態
    pub contract_type: ContractType,
    /// 年金保険料
    pub pension_contribution: f64,
    /// 障害保険料
    pub disability_contribution: f64,
    /// 疾病保険料（任意加入時のみ）
    pub sickness_contribution: f64,
    /// 社会保険料合計
    pub total_social_security: f64,
    /// 健康保険の算定基礎額（総支給額 − 社会保険料合計）
    pub health_insurance_base: f64,
    /// 健康保険料
    pub health_contribution: f64,
    /// 経費控除額（上限あり）
    pub cost_of_income: f64,
    /// 課税基準額（整数通貨単位に丸め済み）
    pub tax_base: f64,
    /// 税額控除前の所得税
    pub tax_before_allowance: f64,
    /// 税額控除額
    pub tax_free_deduction: f64,
    /// 最終的な所得税
    pub income_tax: f64,
    /// PPK拠出額（加入時のみ）
    pub ppk_contribution: f64,
    /// 手取り額（ネット）
    pub net: f64,
    /// 計算に使用した料率スナップショット（凍結コピー）
    pub rates: TaxRateSnapshot,
    /// 表示用の内訳行
    pub breakdown: Vec<String>,
}

impl SalaryResult {
    /// 料率スナップショットを永続化用のJSON文字列に変換する
    ///
    /// # 戻り値
    /// 結果と一緒にそのまま保存するスナップショットのJSON表現
    pub fn snapshot_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.rates)?)
    }
}
