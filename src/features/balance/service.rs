// 精算残高計算サービス
//
// 取引・前払金・日当を集計して出張の精算残高を算出する純粋関数。
// 渡された入力のみを集計し、I/Oは行わない。

use super::models::{
    Advance, CategoryTotals, HotelStatus, ProjectBalance, Transaction, TransactionCategory,
    TripStatus,
};
use crate::features::diet::{calculate_diet, DietMode, DietRate, TripPeriod};
use crate::shared::errors::AppResult;
use crate::shared::utils::round2;
use log::debug;

/// 出張の精算残高を計算する
///
/// # 引数
/// * `period` - 出張期間
/// * `rate` - 凍結済みの日当レート
/// * `status` - 出張ステータス（日当計算モードの選択に使用）
/// * `hotel_limit` - 凍結済みの宿泊費上限
/// * `transactions` - 取引一覧（私費・除外分はここでふるい落とす）
/// * `advances` - 前払金一覧（常に全件集計）
///
/// # 戻り値
/// 精算残高、または日当計算に必要な終了日時が欠落している場合はエラー
pub fn calculate_project_balance(
    period: &TripPeriod,
    rate: &DietRate,
    status: TripStatus,
    hotel_limit: f64,
    transactions: &[Transaction],
    advances: &[Advance],
) -> AppResult<ProjectBalance> {
    // 私費・プロジェクト除外を落とした有効取引のみが全ての合計に入る
    let valid: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_valid_for_balance())
        .collect();

    let category_totals = sum_by_category(&valid);
    let expenses_total = round2(category_totals.total());
    let advances_total = round2(advances.iter().map(|a| a.amount).sum());

    // 宿泊費上限の判定（宿泊費 + 駐車料金の合算に対して）
    let hotel_combined = round2(category_totals.hotel + category_totals.parking);
    let (hotel_status, hotel_overage) = classify_hotel(hotel_combined, hotel_limit);

    // ステータスから日当計算モードを選択
    let mode = select_diet_mode(period, status);
    let diet = calculate_diet(period, rate, mode)?;

    let balance = round2(advances_total - expenses_total + diet.total_diet);
    let average_daily_expense = average_daily_expense(expenses_total, &diet);

    debug!(
        "精算残高計算完了: advances={advances_total}, expenses={expenses_total}, diet={}, balance={balance}",
        diet.total_diet
    );

    Ok(ProjectBalance {
        advances_total,
        expenses_total,
        category_totals,
        hotel_combined,
        hotel_limit,
        hotel_status,
        hotel_overage,
        average_daily_expense,
        diet,
        balance,
    })
}

/// 有効取引をカテゴリ別に集計する（各カテゴリの出力時点で丸め）
fn sum_by_category(valid: &[&Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for t in valid {
        match t.category {
            TransactionCategory::Food => totals.food += t.amount,
            TransactionCategory::Transport => totals.transport += t.amount,
            TransactionCategory::Hotel => totals.hotel += t.amount,
            TransactionCategory::Parking => totals.parking += t.amount,
            TransactionCategory::Fuel => totals.fuel += t.amount,
            TransactionCategory::Other => totals.other += t.amount,
        }
    }
    totals.food = round2(totals.food);
    totals.transport = round2(totals.transport);
    totals.hotel = round2(totals.hotel);
    totals.parking = round2(totals.parking);
    totals.fuel = round2(totals.fuel);
    totals.other = round2(totals.other);
    totals
}

/// 宿泊関連合計を凍結済み上限に対して判定する
///
/// 0 → 宿泊費なし、上限以下（同額含む） → 上限以内、
/// 上限超 → 超過（超過額付き）
fn classify_hotel(hotel_combined: f64, hotel_limit: f64) -> (HotelStatus, f64) {
    if hotel_combined == 0.0 {
        (HotelStatus::NoHotel, 0.0)
    } else if hotel_combined <= hotel_limit {
        (HotelStatus::WithinLimit, 0.0)
    } else {
        (HotelStatus::OverLimit, round2(hotel_combined - hotel_limit))
    }
}

/// 出張ステータスから日当計算モードを選択する
///
/// 締め済みかつ実終了日時あり → CLOSED、進行中 → LIVE、それ以外 → PLANNED
fn select_diet_mode(period: &TripPeriod, status: TripStatus) -> DietMode {
    match status {
        TripStatus::Closed if period.actual_end_datetime.is_some() => DietMode::Closed,
        TripStatus::Active => DietMode::Live,
        _ => DietMode::Planned,
    }
}

/// 1日あたり平均経費を計算する
///
/// 経過日数は「開始済みの日数」（丸1日数 + 端数があれば1）。
/// 未開始の場合は0を返す
fn average_daily_expense(expenses_total: f64, diet: &crate::features::diet::DietResult) -> f64 {
    let days_elapsed = diet.full_days + u32::from(diet.partial_day_multiplier > 0.0);
    if days_elapsed == 0 {
        0.0
    } else {
        round2(expenses_total / days_elapsed as f64)
    }
}
