/// 機能別モジュール
///
/// このモジュールは、精算計算コアの機能を機能別に整理したモジュール群を提供します。
/// 各機能モジュールは、その機能に関連するすべてのコード（モデル、計算サービス）
/// を含む自己完結型のユニットです。
// 機能モジュールの宣言
pub mod balance;
pub mod diet;
pub mod duplicates;
pub mod salary;
