// ========================================
// sidenav: パネル設定
// ========================================

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SIDEBAR_ID: &str = "sidebar";
pub const DEFAULT_MAIN_ID: &str = "main";
pub const DEFAULT_OPEN_WIDTH: &str = "250px";
pub const DEFAULT_CLOSED_WIDTH: &str = "0";

/// サイドパネルの設定
/// JSONで省略されたフィールドはデフォルト値になる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// パネル要素のID
    pub sidebar_id: String,
    /// メインコンテンツ要素のID
    pub main_id: String,
    /// 展開時のパネル幅（メインのmargin-leftも同じ値）
    pub open_width: String,
    /// 折りたたみ時の値
    pub closed_width: String,
    /// ページ読み込み時に展開しておくか
    pub start_open: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sidebar_id: DEFAULT_SIDEBAR_ID.to_string(),
            main_id: DEFAULT_MAIN_ID.to_string(),
            open_width: DEFAULT_OPEN_WIDTH.to_string(),
            closed_width: DEFAULT_CLOSED_WIDTH.to_string(),
            start_open: false,
        }
    }
}

impl PanelConfig {
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded panel config from {}", path.as_ref().display());
        Self::from_json_str(&source)
    }

    /// 状態に対応する幅を返す
    pub fn width_for(&self, open: bool) -> &str {
        if open {
            &self.open_width
        } else {
            &self.closed_width
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_id("sidebar_id", &self.sidebar_id)?;
        validate_id("main_id", &self.main_id)?;
        if self.sidebar_id == self.main_id {
            return Err(PanelError::InvalidConfig(format!(
                "sidebar_id and main_id must differ (both `{}`)",
                self.sidebar_id
            )));
        }
        if self.open_width.trim().is_empty() || self.closed_width.trim().is_empty() {
            return Err(PanelError::InvalidConfig("widths must not be empty".into()));
        }
        // 同じ値だと開閉しても見た目が変わらない
        if self.open_width.trim() == self.closed_width.trim() {
            return Err(PanelError::InvalidConfig(format!(
                "open_width and closed_width must differ (both `{}`)",
                self.open_width
            )));
        }
        Ok(())
    }
}

/// CSSの`#id`セレクタにそのまま書けるIDか確認
/// 英数字・`-`・`_`のみ、先頭（`-`一つは省いて）は英字か`_`
fn validate_id(field: &str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(PanelError::InvalidConfig(format!("{} is empty", field)));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(PanelError::InvalidConfig(format!(
            "{} `{}` contains invalid character {:?}",
            field, id, c
        )));
    }
    let head = id.strip_prefix('-').unwrap_or(id);
    if !head.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return Err(PanelError::InvalidConfig(format!(
            "{} `{}` is not a valid CSS identifier",
            field, id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.sidebar_id, "sidebar");
        assert_eq!(config.main_id, "main");
        assert_eq!(config.width_for(true), "250px");
        assert_eq!(config.width_for(false), "0");
        assert!(!config.start_open);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PanelConfig::from_json_str(r#"{ "open_width": "320px" }"#).unwrap();
        assert_eq!(config.open_width, "320px");
        assert_eq!(config.sidebar_id, "sidebar");
        assert_eq!(config.closed_width, "0");
    }

    #[test]
    fn test_same_ids_rejected() {
        let err = PanelConfig::from_json_str(r#"{ "sidebar_id": "nav", "main_id": "nav" }"#)
            .unwrap_err();
        assert!(matches!(err, PanelError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_width_rejected() {
        let err = PanelConfig::from_json_str(r#"{ "open_width": " " }"#).unwrap_err();
        assert!(matches!(err, PanelError::InvalidConfig(_)));
    }

    #[test]
    fn test_ids_must_be_css_identifiers() {
        for bad in ["side bar", "1main", "nav#x", "-2col", "--", "-"] {
            let config = PanelConfig {
                sidebar_id: bad.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(PanelError::InvalidConfig(_))),
                "{bad:?} should be rejected"
            );
        }

        let err = PanelConfig::from_json_str(r#"{ "main_id": "1main" }"#).unwrap_err();
        assert!(matches!(err, PanelError::InvalidConfig(_)));

        for good in ["nav", "side-nav", "_nav2", "-nav"] {
            let config = PanelConfig {
                sidebar_id: good.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn test_equal_widths_rejected() {
        let err = PanelConfig::from_json_str(r#"{ "open_width": "0" }"#).unwrap_err();
        assert!(matches!(err, PanelError::InvalidConfig(_)));

        let config = PanelConfig {
            open_width: "10rem".to_string(),
            closed_width: "10rem".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = PanelConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PanelError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PanelConfig::from_json_file("/nonexistent/sidenav.json").unwrap_err();
        assert!(matches!(err, PanelError::Io(_)));
    }
}
