use super::PanelState;
use crate::config::PanelConfig;
use crate::dom::{ElementLookup, StyleTarget};
use crate::error::{PanelError, Result};

pub const PANEL_WIDTH_PROPERTY: &str = "width";
pub const MAIN_OFFSET_PROPERTY: &str = "margin-left";

/// サイドナビゲーションの開閉コンポーネント
///
/// パネル要素の`width`とメイン要素の`margin-left`を同じ値に揃える。
/// 開いていれば`open_width`、閉じていれば`closed_width`。
/// 要素はIDでドキュメントから毎回引き直す。
pub struct SidePanel<D: ElementLookup> {
    document: D,
    config: PanelConfig,
    state: PanelState,
}

impl<D: ElementLookup> SidePanel<D> {
    /// デフォルト設定（#sidebar / #main, 250px）で作成
    pub fn new(document: D) -> Self {
        Self::with_config(document, PanelConfig::default())
    }

    pub fn with_config(document: D, config: PanelConfig) -> Self {
        Self {
            document,
            config,
            state: PanelState::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// 開閉を反転する
    pub fn toggle(&mut self) -> Result<()> {
        self.set_open(!self.state.is_open())
    }

    pub fn open(&mut self) -> Result<()> {
        self.set_open(true)
    }

    pub fn close(&mut self) -> Result<()> {
        self.set_open(false)
    }

    /// 現在の状態のスタイルを再適用する
    pub fn sync(&mut self) -> Result<()> {
        self.set_open(self.state.is_open())
    }

    /// ページ読み込み時の初期化（start_openなら展開、そうでなければ閉じた状態を書き込む）
    pub fn apply_initial_state(&mut self) -> Result<()> {
        if self.config.start_open {
            self.open()
        } else {
            self.sync()
        }
    }

    /// 状態を設定してスタイルに反映
    ///
    /// 両方の要素が揃っていることを確認してから書き込む。
    /// 失敗時はフラグを変更しない。
    pub fn set_open(&mut self, open: bool) -> Result<()> {
        let (panel, main) = self.resolve_elements()?;
        let width = self.config.width_for(open);

        let previous_width = panel.style(PANEL_WIDTH_PROPERTY);
        panel.set_style(PANEL_WIDTH_PROPERTY, width)?;

        if let Err(err) = main.set_style(MAIN_OFFSET_PROPERTY, width) {
            // パネルだけ開いた状態を残さない
            let restore = previous_width.as_deref().unwrap_or("");
            if let Err(restore_err) = panel.set_style(PANEL_WIDTH_PROPERTY, restore) {
                log::warn!(
                    "Failed to restore #{} width: {}",
                    self.config.sidebar_id,
                    restore_err
                );
            }
            return Err(err);
        }

        let was_open = self.state.is_open();
        self.state.set(open);
        log::debug!(
            "Side panel {} -> {} (width: {})",
            if was_open { "open" } else { "closed" },
            if open { "open" } else { "closed" },
            width
        );
        Ok(())
    }

    fn resolve_elements(&self) -> Result<(D::Element, D::Element)> {
        let panel = self.lookup(&self.config.sidebar_id)?;
        let main = self.lookup(&self.config.main_id)?;
        Ok((panel, main))
    }

    fn lookup(&self, id: &str) -> Result<D::Element> {
        self.document.element_by_id(id).ok_or_else(|| {
            log::warn!("Side panel element #{} not found", id);
            PanelError::element_not_found(id)
        })
    }
}
