// ========================================
// sidenav: DOM抽象化レイヤー
// ========================================
//
// パネル操作はこのトレイト越しに要素へアクセスする。
// ブラウザではweb-sys、テストやネイティブではメモリ上のドキュメントを使う。

pub mod memory;
#[cfg(feature = "wasm")]
pub mod web;

use crate::error::Result;

pub use memory::{MemoryDocument, MemoryElement};
#[cfg(feature = "wasm")]
pub use web::WebDocument;

/// インラインスタイルを持つ要素
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str) -> Result<()>;

    /// 未設定の場合はNone
    fn style(&self, property: &str) -> Option<String>;
}

/// IDで要素を引けるドキュメント
pub trait ElementLookup {
    type Element: StyleTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl<T: ElementLookup + ?Sized> ElementLookup for &T {
    type Element = T::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }
}
