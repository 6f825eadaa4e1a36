// メモリ上のDOM実装（ライブページなしでパネルを動かす用）

use super::{ElementLookup, StyleTarget};
use crate::error::{PanelError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementData {
    styles: HashMap<String, String>,
    /// 書き込みを拒否するプロパティ
    rejected: HashSet<String>,
}

/// 要素ハンドル
/// クローンは同じ要素を指す（DOMノードの参照と同じ扱い）
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定プロパティへの書き込みを失敗させる
    pub fn reject_property(&self, property: &str) {
        self.data.borrow_mut().rejected.insert(property.to_string());
    }

    pub fn accept_property(&self, property: &str) {
        self.data.borrow_mut().rejected.remove(property);
    }
}

impl StyleTarget for MemoryElement {
    fn set_style(&self, property: &str, value: &str) -> Result<()> {
        let mut data = self.data.borrow_mut();
        if data.rejected.contains(property) {
            return Err(PanelError::style(property, "rejected by document"));
        }
        // 空文字はCSSStyleDeclaration.setPropertyと同じく削除扱い
        if value.is_empty() {
            data.styles.remove(property);
        } else {
            data.styles.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn style(&self, property: &str) -> Option<String> {
        self.data.borrow().styles.get(property).cloned()
    }
}

/// IDと要素の対応表
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定IDの要素を持つドキュメントを作成
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut document = Self::new();
        for id in ids {
            document.insert(id);
        }
        document
    }

    /// 要素を追加（既存なら既存のハンドルを返す）
    pub fn insert(&mut self, id: impl Into<String>) -> MemoryElement {
        self.elements.entry(id.into()).or_default().clone()
    }

    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_styles() {
        let mut document = MemoryDocument::new();
        let element = document.insert("sidebar");
        element.set_style("width", "250px").unwrap();

        let looked_up = document.element_by_id("sidebar").unwrap();
        assert_eq!(looked_up.style("width").as_deref(), Some("250px"));
        assert_eq!(looked_up.style("height"), None);
    }

    #[test]
    fn test_insert_existing_keeps_styles() {
        let mut document = MemoryDocument::with_elements(["main"]);
        document
            .get("main")
            .unwrap()
            .set_style("margin-left", "0")
            .unwrap();

        let again = document.insert("main");
        assert_eq!(again.style("margin-left").as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_value_removes_property() {
        let element = MemoryElement::new();
        element.set_style("width", "250px").unwrap();
        element.set_style("width", "").unwrap();
        assert_eq!(element.style("width"), None);
    }

    #[test]
    fn test_rejected_property() {
        let element = MemoryElement::new();
        element.reject_property("width");
        let err = element.set_style("width", "250px").unwrap_err();
        assert!(matches!(err, PanelError::Style { ref property, .. } if property == "width"));
        assert_eq!(element.style("width"), None);

        element.accept_property("width");
        assert!(element.set_style("width", "250px").is_ok());
    }

    #[test]
    fn test_removed_element_not_found() {
        let mut document = MemoryDocument::with_elements(["sidebar", "main"]);
        assert!(document.remove("sidebar").is_some());
        assert!(!document.contains("sidebar"));
        assert!(document.element_by_id("sidebar").is_none());
        assert!(document.element_by_id("main").is_some());
    }
}
