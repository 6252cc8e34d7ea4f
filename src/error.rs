use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("取得に失敗しました ({url}): {reason}")]
    SourceFetch { url: String, reason: String },

    #[error("CSV解析エラー: {0}")]
    Parse(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("QRコード生成エラー: {0}")]
    QrEncode(String),

    #[error("ページ生成エラー: {0}")]
    Render(String),

    #[error("テンプレートエラー: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl CloudError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        CloudError::SourceFetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;
