//! 国別日当レートの静的参照データ
//!
//! 出張作成時に一度だけ参照され、レートと通貨はその時点で出張側に
//! コピーされて凍結される。以後この表を更新しても既存出張の日当には
//! 影響しない。

use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 国別日当レート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRate {
    /// 国コード（ISO 3166-1 alpha-2）
    pub code: String,
    /// 国名
    pub name: String,
    /// 通貨コード
    pub currency: String,
    /// 1日あたりの日当額
    pub daily_rate: f64,
    /// 1泊あたりの宿泊費上限額
    pub accommodation_limit: f64,
}

/// 国別日当レート表
///
/// 法令改定時はここを更新する。既存出張には遡及しない（凍結済み）
static COUNTRY_RATES: Lazy<Vec<CountryRate>> = Lazy::new(|| {
    vec![
        rate("PL", "Polska", "PLN", 45.0, 270.0),
        rate("DE", "Niemcy", "EUR", 49.0, 170.0),
        rate("FR", "Francja", "EUR", 55.0, 200.0),
        rate("CZ", "Czechy", "EUR", 41.0, 120.0),
        rate("GB", "Wielka Brytania", "GBP", 45.0, 220.0),
        rate("US", "Stany Zjednoczone", "USD", 59.0, 350.0),
        rate("IT", "Włochy", "EUR", 53.0, 192.0),
        rate("ES", "Hiszpania", "EUR", 50.0, 160.0),
        rate("NL", "Holandia", "EUR", 50.0, 130.0),
        rate("SE", "Szwecja", "SEK", 510.0, 2000.0),
    ]
});

fn rate(code: &str, name: &str, currency: &str, daily_rate: f64, accommodation_limit: f64) -> CountryRate {
    CountryRate {
        code: code.to_string(),
        name: name.to_string(),
        currency: currency.to_string(),
        daily_rate,
        accommodation_limit,
    }
}

/// 国コードから日当レートを検索する
///
/// # 引数
/// * `code` - 国コード（大文字小文字は区別しない）
///
/// # 戻り値
/// 該当する国別レート、存在しない場合はNotFoundエラー
pub fn find_country_rate(code: &str) -> AppResult<&'static CountryRate> {
    COUNTRY_RATES
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| AppError::not_found(format!("国コード「{code}」の日当レート")))
}

/// 登録されている全ての国別レートを取得する
pub fn all_country_rates() -> &'static [CountryRate] {
    &COUNTRY_RATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_country_rate() {
        // ポーランド国内出張のレート
        let pl = find_country_rate("PL").unwrap();
        assert_eq!(pl.currency, "PLN");
        assert_eq!(pl.daily_rate, 45.0);
        assert_eq!(pl.accommodation_limit, 270.0);
    }

    #[test]
    fn test_find_country_rate_case_insensitive() {
        // 小文字コードでも検索できる
        let de = find_country_rate("de").unwrap();
        assert_eq!(de.code, "DE");
        assert_eq!(de.currency, "EUR");
    }

    #[test]
    fn test_unknown_country_code() {
        // 未登録の国コードはNotFound
        let result = find_country_rate("XX");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_all_rates_valid() {
        // 全エントリが正の値を持つこと
        for rate in all_country_rates() {
            assert!(rate.daily_rate > 0.0, "{}", rate.code);
            assert!(rate.accommodation_limit > 0.0, "{}", rate.code);
            assert_eq!(rate.code.len(), 2);
        }
    }
}
