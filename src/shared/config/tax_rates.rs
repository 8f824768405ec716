//! 税率・社会保険料率のスナップショット
//!
//! 手取り給与計算に使用する料率一式。計算時点の料率をコピーして
//! 結果と一緒に永続化することで、法令改定後も締め済み出張の記録が
//! 変化しないことを保証する（可変のグローバル表への参照を持たない）。

use serde::{Deserialize, Serialize};

/// 税率・保険料率のスナップショット（不変の値オブジェクト）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateSnapshot {
    /// 年金保険料率（ZUS emerytalne）
    pub pension_rate: f64,
    /// 障害保険料率（ZUS rentowe）
    pub disability_rate: f64,
    /// 疾病保険料率（ZUS chorobowe、任意加入）
    pub sickness_rate: f64,
    /// 健康保険料率（NFZ）
    pub health_insurance_rate: f64,
    /// 所得税率（PIT）
    pub income_tax_rate: f64,
    /// 月次の税額控除額（kwota wolna相当）
    pub monthly_tax_free_allowance: f64,
    /// 経費控除率（koszty uzyskania przychodu）
    pub cost_of_income_rate: f64,
    /// 経費控除の月次上限額
    pub max_cost_of_income: f64,
    /// 料率セットの識別ラベル（例: "2024_2025"）
    pub label: String,
}

/// 2024〜2025年度のポーランド法定料率
///
/// # 戻り値
/// 2024/2025年度の料率スナップショット
pub fn tax_rates_2024_2025() -> TaxRateSnapshot {
    TaxRateSnapshot {
        pension_rate: 0.0976,
        disability_rate: 0.015,
        sickness_rate: 0.0245,
        health_insurance_rate: 0.09,
        income_tax_rate: 0.12,
        monthly_tax_free_allowance: 300.0,
        cost_of_income_rate: 0.20,
        max_cost_of_income: 250.0,
        label: "2024_2025".to_string(),
    }
}
