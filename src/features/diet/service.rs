// 日当計算サービス
//
// 法定の日当（ダイエット）を出張期間から算出する純粋関数群。
// 入出力以外の副作用を持たず、I/Oも行わない。

use super::models::{DietMode, DietRate, DietResult, TripPeriod};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{format_money, round2};
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Europe::Warsaw;
use log::debug;

/// 端数時間の係数境界（分単位）
const THIRD_DAY_LIMIT_MIN: i64 = 8 * 60;
const HALF_DAY_LIMIT_MIN: i64 = 12 * 60;

/// 1朝食あたりの控除係数（1日分レートの1/4）
const BREAKFAST_DEDUCTION_FACTOR: f64 = 0.25;

/// 出張期間から日当を計算する
///
/// # 引数
/// * `period` - 出張期間
/// * `rate` - 凍結済みの日当レートと朝食回数
/// * `mode` - 終了日時の選択モード
///
/// # 戻り値
/// 日当計算結果、または必須の終了日時が欠落している場合はエラー
///
/// # 特記事項
/// LIVEモードは現在時刻を参照するため呼び出しごとに結果が変わる。
/// 終了日時が開始日時以前の場合はエラーではなく全て0の結果を返す
/// （「未開始」はUI上の正常な状態）
pub fn calculate_diet(period: &TripPeriod, rate: &DietRate, mode: DietMode) -> AppResult<DietResult> {
    let end = resolve_effective_end(period, mode)?;
    let elapsed_minutes = (end - period.start_datetime).num_minutes();

    // 終了 <= 開始 は未開始状態として扱う（エラーにしない）
    if elapsed_minutes <= 0 {
        debug!("出張未開始のため日当0を返します: elapsed_minutes={elapsed_minutes}");
        return Ok(DietResult::zero(
            &rate.currency,
            "出張がまだ開始されていないため、日当は発生していません".to_string(),
        ));
    }

    let full_days = (elapsed_minutes / (24 * 60)) as u32;
    let remainder_minutes = elapsed_minutes % (24 * 60);
    let partial_day_multiplier = partial_day_multiplier(remainder_minutes);

    let total_days = full_days as f64 + partial_day_multiplier;
    let diet_before_breakfast = round2(total_days * rate.daily_rate);

    // 朝食1回につき1日分レートの1/4を控除。ただし日当総額を上限とする
    let deduction_raw = rate.breakfast_count as f64 * rate.daily_rate * BREAKFAST_DEDUCTION_FACTOR;
    let breakfast_deduction = round2(deduction_raw.min(diet_before_breakfast));
    let total_diet = round2((diet_before_breakfast - breakfast_deduction).max(0.0));

    let breakdown = build_breakdown(
        period.start_datetime,
        full_days,
        remainder_minutes,
        partial_day_multiplier,
        rate,
        breakfast_deduction,
    );

    debug!(
        "日当計算完了: full_days={full_days}, remainder_minutes={remainder_minutes}, total_diet={total_diet}"
    );

    Ok(DietResult {
        full_days,
        partial_day_multiplier,
        total_days,
        diet_before_breakfast,
        breakfast_deduction,
        total_diet,
        currency: rate.currency.clone(),
        breakdown,
        message: None,
    })
}

/// モードに応じた実効終了日時を解決する
///
/// # 引数
/// * `period` - 出張期間
/// * `mode` - 計算モード
///
/// # 戻り値
/// 実効終了日時、または必須の終了日時が未設定の場合はエラー
fn resolve_effective_end(period: &TripPeriod, mode: DietMode) -> AppResult<DateTime<Utc>> {
    match mode {
        DietMode::Live => Ok(Utc::now()),
        DietMode::Planned => period
            .planned_end_datetime
            .ok_or_else(|| AppError::missing_input("計画モードには予定終了日時が必要です")),
        DietMode::Closed => period
            .actual_end_datetime
            .ok_or_else(|| AppError::missing_input("締めモードには実終了日時が必要です")),
    }
}

/// 端数時間から日当係数を求める
///
/// 閉じた重複のない区間規則:
/// - 0分（端数なし） → 0
/// - 8時間未満 → 1/3
/// - 8時間以上12時間未満 → 1/2
/// - 12時間以上 → 1（丸1日扱い）
fn partial_day_multiplier(remainder_minutes: i64) -> f64 {
    if remainder_minutes == 0 {
        0.0
    } else if remainder_minutes < THIRD_DAY_LIMIT_MIN {
        1.0 / 3.0
    } else if remainder_minutes < HALF_DAY_LIMIT_MIN {
        0.5
    } else {
        1.0
    }
}

/// 係数の表示ラベルを取得する
fn multiplier_label(multiplier: f64) -> &'static str {
    if multiplier >= 1.0 {
        "1"
    } else if multiplier >= 0.5 {
        "1/2"
    } else {
        "1/3"
    }
}

/// 日別の内訳行を生成する（監査用）
///
/// 丸1日につき1行、端数がある場合はその時間数と係数を1行、
/// 朝食控除がある場合は控除行を追加する。日付ラベルはワルシャワ
/// 現地時間で表記する
fn build_breakdown(
    start: DateTime<Utc>,
    full_days: u32,
    remainder_minutes: i64,
    multiplier: f64,
    rate: &DietRate,
    breakfast_deduction: f64,
) -> Vec<String> {
    let mut rows = Vec::new();
    let local_start = start.with_timezone(&Warsaw);

    for day in 0..full_days {
        let date = (local_start + Duration::days(day as i64)).format("%Y-%m-%d");
        rows.push(format!(
            "{}日目 ({}): 1 × {} = {}",
            day + 1,
            date,
            format_money(rate.daily_rate, &rate.currency),
            format_money(rate.daily_rate, &rate.currency),
        ));
    }

    if remainder_minutes > 0 {
        let hours = remainder_minutes as f64 / 60.0;
        rows.push(format!(
            "端数 {:.1}時間: {} × {} = {}",
            hours,
            multiplier_label(multiplier),
            format_money(rate.daily_rate, &rate.currency),
            format_money(round2(multiplier * rate.daily_rate), &rate.currency),
        ));
    }

    if breakfast_deduction > 0.0 {
        rows.push(format!(
            "朝食控除: {}回 × {} = -{}",
            rate.breakfast_count,
            format_money(
                round2(rate.daily_rate * BREAKFAST_DEDUCTION_FACTOR),
                &rate.currency
            ),
            format_money(breakfast_deduction, &rate.currency),
        ));
    }

    rows
}
