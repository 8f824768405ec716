use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 計算に必要な入力が欠落している場合のエラー
    /// （PLANNEDモードで予定終了日時なし、CLOSEDモードで実終了日時なし等）
    #[error("必須入力が欠落しています: {0}")]
    MissingInput(String),

    /// 計算式の対象外となる契約形態のエラー
    /// （B2B・その他契約は手取り計算式の対象外であり、手動経理に回す）
    #[error("対象外の契約形態です: {0}")]
    UnsupportedContract(String),

    /// リソースが見つからない場合のエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（データ欠落など）
    Medium,
    /// 高重要度（設定エラーなど）
    High,
    /// 最重要
    Critical,
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::MissingInput(msg) => msg,
            AppError::UnsupportedContract(_) => {
                "この契約形態は自動計算の対象外です。手動で経理処理してください"
            }
            AppError::NotFound(msg) => msg,
            AppError::Configuration(_) => "設定エラーが発生しました",
            AppError::Json(_) => "データ形式の解析でエラーが発生しました",
        }
    }

    /// エラーの詳細情報を取得（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::MissingInput(_) => ErrorSeverity::Medium,
            AppError::UnsupportedContract(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 入力欠落エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 欠落している入力の説明
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        AppError::MissingInput(message.into())
    }

    /// 契約形態対象外エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `contract_type` - 対象外の契約形態名
    pub fn unsupported_contract<S: Into<String>>(contract_type: S) -> Self {
        AppError::UnsupportedContract(contract_type.into())
    }

    /// リソース未発見エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `resource` - 見つからなかったリソース名
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::NotFound(format!("{}が見つかりません", resource.into()))
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// AppErrorからStringへの変換（呼び出し側のUI境界での使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
