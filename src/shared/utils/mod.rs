//! 金額計算用の共有ユーティリティ関数

/// 金額を小数第2位に丸める（半数は0から遠い方向へ丸める）
///
/// # 引数
/// * `value` - 丸める金額
///
/// # 戻り値
/// 小数第2位に丸められた金額
///
/// # 特性
/// - 0.005 → 0.01、-0.005 → -0.01（round-half-away-from-zero）
/// - 各集計ステップの出力時点で適用する。未丸めのまま累積しない
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 金額を整数通貨単位に丸める（課税基準額用）
///
/// # 引数
/// * `value` - 丸める金額
///
/// # 戻り値
/// 整数単位に丸められた金額
pub fn round_to_unit(value: f64) -> f64 {
    value.round()
}

/// 金額を表示用文字列に整形する（小数第2位固定）
///
/// # 引数
/// * `value` - 整形する金額
/// * `currency` - 通貨コード（例: "PLN"）
///
/// # 戻り値
/// "105.00 PLN" 形式の文字列
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{value:.2} {currency}")
}
