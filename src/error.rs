use thiserror::Error;

/// サイドパネル操作で発生するエラー
#[derive(Debug, Error)]
pub enum PanelError {
    /// 参照先のDOM要素が見つからない
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// ホスト側がスタイルの書き込みを拒否した
    #[error("failed to set style `{property}`: {message}")]
    Style { property: String, message: String },

    /// ブラウザのdocumentが取得できない
    #[error("no document available in this environment")]
    NoDocument,

    /// サイドバーツリーの同じ階層に同名の項目がある
    #[error("`{name}` already in `{parent}`")]
    DuplicateNavEntry { name: String, parent: String },

    #[error("`{path}` is not under root directory `{root}`")]
    PathOutsideRoot { path: String, root: String },

    #[error("invalid panel config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse panel config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }

    pub fn style(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Style {
            property: property.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
