// 書類指紋の計算
//
// 請求書番号・金額・日付を正規化して結合し、SHA-256で書類の
// 安定した指紋を得る。OCR/AI抽出の表記ゆれ（大文字小文字・空白）を
// 正規化で吸収する。

use super::models::DocumentFields;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

/// 連続する空白文字のパターン
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("固定パターン"));

/// 指紋フィールドの区切り文字
const DELIMITER: &str = "|";

/// 請求書番号を正規化する（トリム・小文字化・内部空白の圧縮）
///
/// # 引数
/// * `invoice_number` - 抽出された請求書番号
///
/// # 戻り値
/// 正規化された請求書番号
pub fn normalize_invoice_number(invoice_number: &str) -> String {
    let lowered = invoice_number.trim().to_lowercase();
    WHITESPACE.replace_all(&lowered, " ").into_owned()
}

/// 金額を固定小数点2桁の文字列に正規化する
pub fn normalize_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// 日付をISO形式（YYYY-MM-DD）の文字列に正規化する
pub fn normalize_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 書類フィールドから指紋ハッシュを計算する
///
/// # 引数
/// * `fields` - 抽出された書類フィールド
///
/// # 戻り値
/// SHA-256指紋（16進数文字列）。請求書番号・金額・日付のいずれかが
/// 欠落している場合はNone（完全一致戦略のみ無効になり、他の戦略は
/// 影響を受けない）
pub fn compute_fingerprint(fields: &DocumentFields) -> Option<String> {
    let invoice_number = fields.invoice_number.as_deref()?;
    let normalized_invoice = normalize_invoice_number(invoice_number);
    if normalized_invoice.is_empty() {
        return None;
    }
    let amount = fields.amount?;
    let date = fields.issue_date?;

    let material = [
        normalized_invoice,
        normalize_amount(amount),
        normalize_date(date),
    ]
    .join(DELIMITER);

    let mut hasher = Sha256::new();
    hasher.update(material.as_bytes());
    Some(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(invoice: Option<&str>, amount: Option<f64>, date: Option<(i32, u32, u32)>) -> DocumentFields {
        DocumentFields {
            invoice_number: invoice.map(|s| s.to_string()),
            amount,
            issue_date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            vendor_name: None,
        }
    }

    #[test]
    fn test_fingerprint_deterministic_across_formatting() {
        // 大文字小文字・前後空白・内部空白の違いは指紋に影響しない
        let a = compute_fingerprint(&fields(
            Some("FV/2024/001"),
            Some(120.5),
            Some((2024, 3, 1)),
        ))
        .unwrap();
        let b = compute_fingerprint(&fields(
            Some("  fv/2024/001  "),
            Some(120.50),
            Some((2024, 3, 1)),
        ))
        .unwrap();
        assert_eq!(a, b);

        let c = compute_fingerprint(&fields(
            Some("FV 2024  001"),
            Some(120.5),
            Some((2024, 3, 1)),
        ))
        .unwrap();
        let d = compute_fingerprint(&fields(
            Some("fv 2024 001"),
            Some(120.5),
            Some((2024, 3, 1)),
        ))
        .unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn test_fingerprint_differs_on_any_field() {
        let base = compute_fingerprint(&fields(
            Some("FV/2024/001"),
            Some(120.5),
            Some((2024, 3, 1)),
        ))
        .unwrap();

        let other_amount = compute_fingerprint(&fields(
            Some("FV/2024/001"),
            Some(120.51),
            Some((2024, 3, 1)),
        ))
        .unwrap();
        assert_ne!(base, other_amount);

        let other_date = compute_fingerprint(&fields(
            Some("FV/2024/001"),
            Some(120.5),
            Some((2024, 3, 2)),
        ))
        .unwrap();
        assert_ne!(base, other_date);
    }

    #[test]
    fn test_missing_field_disables_fingerprint() {
        // 必須フィールドが1つでも欠ければ指紋は計算されない
        assert!(compute_fingerprint(&fields(None, Some(120.5), Some((2024, 3, 1)))).is_none());
        assert!(compute_fingerprint(&fields(Some("FV/1"), None, Some((2024, 3, 1)))).is_none());
        assert!(compute_fingerprint(&fields(Some("FV/1"), Some(120.5), None)).is_none());
        // 空白だけの請求書番号も欠落扱い
        assert!(compute_fingerprint(&fields(Some("   "), Some(120.5), Some((2024, 3, 1)))).is_none());
    }

    #[test]
    fn test_normalization_helpers() {
        assert_eq!(normalize_invoice_number("  FV/2024/001  "), "fv/2024/001");
        assert_eq!(normalize_amount(120.5), "120.50");
        assert_eq!(
            normalize_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            "2024-03-01"
        );
    }
}
