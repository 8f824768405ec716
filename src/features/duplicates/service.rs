// 書類重複判定サービス
//
// 新規書類を既存書類群と突き合わせ、4段階の戦略で重複候補を
// 採点する。候補ごとに最初に成立した戦略が採用され、戦略同士は
// 組み合わせない。

use super::fingerprint::{compute_fingerprint, normalize_invoice_number};
use super::models::{
    DocumentFields, DuplicateCheckResult, DuplicateMatch, MatchConfidence, StoredDocument,
    SuggestedAction,
};
use log::debug;
use std::cmp::Ordering;

/// 金額比較の許容誤差（1グロシュ）
const AMOUNT_TOLERANCE: f64 = 0.01;

/// 戦略別の類似度スコア
const SIMILARITY_EXACT: f64 = 1.0;
const SIMILARITY_AMOUNT_EXACT_DATE: f64 = 0.92;
const SIMILARITY_AMOUNT_FUZZY_DATE: f64 = 0.78;
const SIMILARITY_INVOICE_ONLY: f64 = 0.6;

/// 新規書類を既存書類群に対して重複判定する
///
/// # 引数
/// * `new_doc` - 新規書類の抽出済みフィールド
/// * `existing` - 同一所有者の既存書類一覧
///
/// # 戻り値
/// 重複判定結果（一致は類似度の降順）
///
/// # 特記事項
/// フィールド欠落はエラーにせず、成立し得る戦略だけで判定する
/// （抽出パイプラインの部分的な失敗に対して段階的に縮退する）
pub fn check_duplicate(
    new_doc: &DocumentFields,
    existing: &[StoredDocument],
) -> DuplicateCheckResult {
    let new_fingerprint = compute_fingerprint(new_doc);

    let mut matched_documents: Vec<DuplicateMatch> = existing
        .iter()
        .filter_map(|candidate| {
            match_candidate(new_doc, new_fingerprint.as_deref(), candidate).map(
                |(similarity, confidence)| DuplicateMatch {
                    document_id: candidate.id,
                    similarity,
                    confidence,
                },
            )
        })
        .collect();

    // 類似度の降順に整列
    matched_documents.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    let best_confidence = matched_documents.iter().map(|m| m.confidence).max();
    let suggested_action = suggest_action(best_confidence);
    let is_duplicate = !matched_documents.is_empty();

    debug!(
        "重複判定完了: candidates={}, matches={}, best={:?}, action={:?}",
        existing.len(),
        matched_documents.len(),
        best_confidence,
        suggested_action
    );

    DuplicateCheckResult {
        is_duplicate,
        best_confidence,
        matched_documents,
        suggested_action,
    }
}

/// 1候補を4戦略で判定する（最初に成立した戦略が勝つ）
///
/// 1. 指紋の完全一致 → 1.0 / Exact
/// 2. 金額一致 + 日付完全一致 → 0.92 / High
/// 3. 金額一致 + 日付±1日 → 0.78 / Medium
/// 4. 請求書番号のみ一致（大文字小文字を無視） → 0.6 / Low
fn match_candidate(
    new_doc: &DocumentFields,
    new_fingerprint: Option<&str>,
    candidate: &StoredDocument,
) -> Option<(f64, MatchConfidence)> {
    // 戦略1: 指紋の完全一致。保存済み指紋がなければフィールドから再計算
    let candidate_fingerprint = candidate
        .fingerprint
        .clone()
        .or_else(|| compute_fingerprint(&candidate.fields));
    if let (Some(new_fp), Some(cand_fp)) = (new_fingerprint, candidate_fingerprint.as_deref()) {
        if new_fp == cand_fp {
            return Some((SIMILARITY_EXACT, MatchConfidence::Exact));
        }
    }

    // 戦略2・3: 金額一致 + 日付（完全一致 / ±1日）
    if let (Some(new_amount), Some(cand_amount)) = (new_doc.amount, candidate.fields.amount) {
        if (new_amount - cand_amount).abs() < AMOUNT_TOLERANCE {
            if let (Some(new_date), Some(cand_date)) =
                (new_doc.issue_date, candidate.fields.issue_date)
            {
                if new_date == cand_date {
                    return Some((SIMILARITY_AMOUNT_EXACT_DATE, MatchConfidence::High));
                }
                if (new_date - cand_date).num_days().abs() <= 1 {
                    return Some((SIMILARITY_AMOUNT_FUZZY_DATE, MatchConfidence::Medium));
                }
            }
        }
    }

    // 戦略4: 請求書番号のみの一致
    if let (Some(new_invoice), Some(cand_invoice)) = (
        new_doc.invoice_number.as_deref(),
        candidate.fields.invoice_number.as_deref(),
    ) {
        let new_norm = normalize_invoice_number(new_invoice);
        let cand_norm = normalize_invoice_number(cand_invoice);
        if !new_norm.is_empty() && new_norm == cand_norm {
            return Some((SIMILARITY_INVOICE_ONLY, MatchConfidence::Low));
        }
    }

    None
}

/// 最良一致の確信度から推奨アクションを導く
///
/// Exact/High → 統合、Medium → 要確認、Low・一致なし → 新規登録
fn suggest_action(best_confidence: Option<MatchConfidence>) -> SuggestedAction {
    match best_confidence {
        Some(MatchConfidence::Exact) | Some(MatchConfidence::High) => SuggestedAction::Merge,
        Some(MatchConfidence::Medium) => SuggestedAction::Review,
        Some(MatchConfidence::Low) | None => SuggestedAction::AddNew,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(invoice: Option<&str>, amount: Option<f64>, issue_date: Option<NaiveDate>) -> DocumentFields {
        DocumentFields {
            invoice_number: invoice.map(|s| s.to_string()),
            amount,
            issue_date,
            vendor_name: None,
        }
    }

    fn stored(id: i64, fields: DocumentFields) -> StoredDocument {
        let fingerprint = compute_fingerprint(&fields);
        StoredDocument {
            id,
            fields,
            fingerprint,
        }
    }

    #[test]
    fn test_exact_fingerprint_match() {
        // 同一の（請求書番号・金額・日付）→ 指紋一致、統合を推奨
        let existing = vec![stored(
            1,
            doc(Some("FV/2024/001"), Some(120.5), Some(date(2024, 3, 1))),
        )];
        let new_doc = doc(Some("  fv/2024/001 "), Some(120.5), Some(date(2024, 3, 1)));

        let result = check_duplicate(&new_doc, &existing);

        assert!(result.is_duplicate);
        assert_eq!(result.best_confidence, Some(MatchConfidence::Exact));
        assert_eq!(result.matched_documents[0].similarity, 1.0);
        assert_eq!(result.suggested_action, SuggestedAction::Merge);
    }

    #[test]
    fn test_amount_and_exact_date_match() {
        // 請求書番号が異なっても金額 + 日付完全一致 → High、統合を推奨
        let existing = vec![stored(
            1,
            doc(Some("FV/2024/001"), Some(120.5), Some(date(2024, 3, 1))),
        )];
        let new_doc = doc(Some("INNY/99"), Some(120.5), Some(date(2024, 3, 1)));

        let result = check_duplicate(&new_doc, &existing);

        assert_eq!(result.best_confidence, Some(MatchConfidence::High));
        assert_eq!(result.matched_documents[0].similarity, 0.92);
        assert_eq!(result.suggested_action, SuggestedAction::Merge);
    }

    #[test]
    fn test_amount_and_fuzzy_date_match() {
        // 同額120.50、日付が1日違い、請求書番号なし → Medium、要確認
        let existing = vec![stored(1, doc(None, Some(120.5), Some(date(2024, 3, 1))))];
        let new_doc = doc(None, Some(120.5), Some(date(2024, 3, 2)));

        let result = check_duplicate(&new_doc, &existing);

        assert!(result.is_duplicate);
        assert_eq!(result.best_confidence, Some(MatchConfidence::Medium));
        assert_eq!(result.matched_documents[0].similarity, 0.78);
        assert_eq!(result.suggested_action, SuggestedAction::Review);
    }

    #[test]
    fn test_invoice_number_only_match() {
        // 金額・日付が合わなくても請求書番号一致 → Low、新規登録のまま
        let existing = vec![stored(
            1,
            doc(Some("FV/2024/001"), Some(999.99), Some(date(2024, 1, 1))),
        )];
        let new_doc = doc(Some("fv/2024/001"), Some(120.5), Some(date(2024, 3, 1)));

        let result = check_duplicate(&new_doc, &existing);

        assert!(result.is_duplicate);
        assert_eq!(result.best_confidence, Some(MatchConfidence::Low));
        assert_eq!(result.matched_documents[0].similarity, 0.6);
        assert_eq!(result.suggested_action, SuggestedAction::AddNew);
    }

    #[test]
    fn test_no_match_is_excluded() {
        // どの戦略も成立しない候補は結果に含まれない
        let existing = vec![stored(
            1,
            doc(Some("FV/2024/001"), Some(999.99), Some(date(2024, 1, 1))),
        )];
        let new_doc = doc(Some("FV/2024/002"), Some(120.5), Some(date(2024, 3, 1)));

        let result = check_duplicate(&new_doc, &existing);

        assert!(!result.is_duplicate);
        assert!(result.best_confidence.is_none());
        assert!(result.matched_documents.is_empty());
        assert_eq!(result.suggested_action, SuggestedAction::AddNew);
    }

    #[test]
    fn test_missing_fields_degrade_gracefully() {
        // 全フィールド欠落でもエラーにならず、一致なしとして返る
        let existing = vec![stored(
            1,
            doc(Some("FV/2024/001"), Some(120.5), Some(date(2024, 3, 1))),
        )];
        let result = check_duplicate(&DocumentFields::default(), &existing);

        assert!(!result.is_duplicate);
        assert_eq!(result.suggested_action, SuggestedAction::AddNew);
    }

    #[test]
    fn test_matches_sorted_by_similarity_descending() {
        // 複数一致は類似度の降順で返る
        let existing = vec![
            // 請求書番号のみ一致 → 0.6
            stored(1, doc(Some("FV/2024/001"), Some(5.0), Some(date(2023, 1, 1)))),
            // 金額 + 日付完全一致 → 0.92
            stored(2, doc(None, Some(120.5), Some(date(2024, 3, 1)))),
            // 金額 + 日付±1日 → 0.78
            stored(3, doc(None, Some(120.5), Some(date(2024, 3, 2)))),
        ];
        let new_doc = doc(Some("FV/2024/001"), Some(120.5), Some(date(2024, 3, 1)));

        let result = check_duplicate(&new_doc, &existing);

        let similarities: Vec<f64> = result
            .matched_documents
            .iter()
            .map(|m| m.similarity)
            .collect();
        assert_eq!(similarities, vec![0.92, 0.78, 0.6]);
        assert_eq!(result.matched_documents[0].document_id, 2);
        // 最良一致（High）から統合を推奨
        assert_eq!(result.suggested_action, SuggestedAction::Merge);
    }

    #[test]
    fn test_first_strategy_wins_per_candidate() {
        // 指紋一致する候補は金額+日付戦略より先に完全一致として採点される
        let fields = doc(Some("FV/2024/001"), Some(120.5), Some(date(2024, 3, 1)));
        let existing = vec![stored(1, fields.clone())];

        let result = check_duplicate(&fields, &existing);

        assert_eq!(result.matched_documents.len(), 1);
        assert_eq!(result.matched_documents[0].confidence, MatchConfidence::Exact);
        assert_eq!(result.matched_documents[0].similarity, 1.0);
    }

    #[test]
    fn test_urgency_ordering() {
        // 類似度の強い戦略ほど推奨アクションの緊急度が上がる
        assert!(SuggestedAction::AddNew < SuggestedAction::Review);
        assert!(SuggestedAction::Review < SuggestedAction::Merge);
        assert!(MatchConfidence::Low < MatchConfidence::Medium);
        assert!(MatchConfidence::Medium < MatchConfidence::High);
        assert!(MatchConfidence::High < MatchConfidence::Exact);

        assert_eq!(suggest_action(None), SuggestedAction::AddNew);
        assert_eq!(
            suggest_action(Some(MatchConfidence::Low)),
            SuggestedAction::AddNew
        );
        assert_eq!(
            suggest_action(Some(MatchConfidence::Medium)),
            SuggestedAction::Review
        );
        assert_eq!(
            suggest_action(Some(MatchConfidence::High)),
            SuggestedAction::Merge
        );
        assert_eq!(
            suggest_action(Some(MatchConfidence::Exact)),
            SuggestedAction::Merge
        );
    }

    #[test]
    fn test_amount_tolerance() {
        // 1グロシュ未満の差は同額とみなす
        let existing = vec![stored(1, doc(None, Some(120.504), Some(date(2024, 3, 1))))];
        let same = check_duplicate(&doc(None, Some(120.50), Some(date(2024, 3, 1))), &existing);
        assert_eq!(same.best_confidence, Some(MatchConfidence::High));

        // 1グロシュ以上の差は別金額
        let existing = vec![stored(1, doc(None, Some(120.52), Some(date(2024, 3, 1))))];
        let different =
            check_duplicate(&doc(None, Some(120.50), Some(date(2024, 3, 1))), &existing);
        assert!(!different.is_duplicate);
    }
}
