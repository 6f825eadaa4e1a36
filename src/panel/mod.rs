// ========================================
// sidenav: サイドパネル
// ========================================

pub mod toggle;

pub use toggle::{MAIN_OFFSET_PROPERTY, PANEL_WIDTH_PROPERTY, SidePanel};

/// パネルの開閉状態
/// 呼び出し側（SidePanel）が所有し、グローバルには持たない
/// Default は閉じた状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn set(&mut self, open: bool) {
        self.open = open;
    }
}
