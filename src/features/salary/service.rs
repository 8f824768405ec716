// 手取り給与計算サービス
//
// ポーランドの契約形態別税制（ZUS・NFZ・PIT）に基づき、総支給額から
// 手取り額の内訳を算出する。計算順序は固定で、各ステップの基礎額は
// 前のステップの結果に依存する。

use super::models::{ContractType, SalaryInput, SalaryResult};
use crate::shared::config::TaxRateSnapshot;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{format_money, round2, round_to_unit};
use log::debug;

/// 総支給額から手取り給与の内訳を計算する
///
/// # 引数
/// * `input` - 総支給額と契約形態フラグ
/// * `rates` - 計算時点で捕捉された料率スナップショット
///
/// # 戻り値
/// 手取り給与の内訳、またはB2B・その他契約の場合はエラー
///
/// # 特記事項
/// 中間値は全て計算時点で小数第2位に丸める。内訳の表示行は
/// ユーザー向け成果物であり、数値と1グロシュ単位で一致させる
/// 必要があるため、最後にまとめて丸めてはならない
pub fn calculate_net_salary(
    input: &SalaryInput,
    rates: &TaxRateSnapshot,
) -> AppResult<SalaryResult> {
    // B2B・その他は式の対象外。黙って0を返さず明示的に弾く
    match input.contract_type {
        ContractType::Employment | ContractType::CivilContract => {}
        unsupported => {
            return Err(AppError::unsupported_contract(unsupported.label()));
        }
    }

    if input.gross < 0.0 {
        return Err(AppError::validation("総支給額は0以上である必要があります"));
    }

    let gross = round2(input.gross);

    // 1. 社会保険料（疾病保険は任意加入時のみ）
    let pension_contribution = round2(gross * rates.pension_rate);
    let disability_contribution = round2(gross * rates.disability_rate);
    let sickness_contribution = if input.voluntary_sickness_insurance {
        round2(gross * rates.sickness_rate)
    } else {
        0.0
    };
    let total_social_security =
        round2(pension_contribution + disability_contribution + sickness_contribution);

    // 2. 健康保険（基礎額 = 総支給額 − 社会保険料合計）
    let health_insurance_base = round2(gross - total_social_security);
    let health_contribution = round2(health_insurance_base * rates.health_insurance_rate);

    // 3. 所得税（基礎額は健康保険と同じ。課税基準額は整数単位に丸める）
    let cost_of_income = round2(
        (health_insurance_base * rates.cost_of_income_rate).min(rates.max_cost_of_income),
    );
    let tax_base = round_to_unit((health_insurance_base - cost_of_income).max(0.0));
    let tax_before_allowance = round2(tax_base * rates.income_tax_rate);
    let tax_free_deduction = round2(tax_before_allowance.min(rates.monthly_tax_free_allowance));
    let income_tax = round2((tax_before_allowance - tax_free_deduction).max(0.0));

    // 4. PPK拠出（加入時のみ）
    let ppk_contribution = if input.ppk_enabled {
        round2(gross * input.ppk_percentage)
    } else {
        0.0
    };

    // 5. 手取り額
    let net = round2(
        gross - total_social_security - health_contribution - income_tax - ppk_contribution,
    );

    debug!(
        "手取り計算完了: gross={gross}, ss={total_social_security}, health={health_contribution}, tax={income_tax}, net={net}"
    );

    let breakdown = build_breakdown(
        gross,
        pension_contribution,
        disability_contribution,
        sickness_contribution,
        total_social_security,
        health_contribution,
        cost_of_income,
        tax_base,
        income_tax,
        ppk_contribution,
        net,
    );

    Ok(SalaryResult {
        gross,
        contract_type: input.contract_type,
        pension_contribution,
        disability_contribution,
        sickness_contribution,
        total_social_security,
        health_insurance_base,
        health_contribution,
        cost_of_income,
        tax_base,
        tax_before_allowance,
        tax_free_deduction,
        income_tax,
        ppk_contribution,
        net,
        rates: rates.clone(),
        breakdown,
    })
}

/// 表示用の内訳行を生成する（数値フィールドと同じ丸め済みの値を使う）
#[allow(clippy::too_many_arguments)]
fn build_breakdown(
    gross: f64,
    pension: f64,
    disability: f64,
    sickness: f64,
    total_social_security: f64,
    health: f64,
    cost_of_income: f64,
    tax_base: f64,
    income_tax: f64,
    ppk: f64,
    net: f64,
) -> Vec<String> {
    let mut rows = vec![
        format!("総支給額: {}", format_money(gross, "PLN")),
        format!("年金保険料: -{}", format_money(pension, "PLN")),
        format!("障害保険料: -{}", format_money(disability, "PLN")),
    ];
    if sickness > 0.0 {
        rows.push(format!("疾病保険料: -{}", format_money(sickness, "PLN")));
    }
    rows.push(format!(
        "社会保険料合計: -{}",
        format_money(total_social_security, "PLN")
    ));
    rows.push(format!("健康保険料: -{}", format_money(health, "PLN")));
    rows.push(format!(
        "経費控除: {}",
        format_money(cost_of_income, "PLN")
    ));
    rows.push(format!("課税基準額: {}", format_money(tax_base, "PLN")));
    rows.push(format!("所得税: -{}", format_money(income_tax, "PLN")));
    if ppk > 0.0 {
        rows.push(format!("PPK拠出: -{}", format_money(ppk, "PLN")));
    }
    rows.push(format!("手取り額: {}", format_money(net, "PLN")));
    rows
}
