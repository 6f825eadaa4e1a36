// WASM環境用のDOM実装
// web-sysのHtmlElement.style()を直接書き換える

use super::{ElementLookup, StyleTarget};
use crate::error::{PanelError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// ブラウザのdocumentラッパー
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// グローバルwindowのdocumentを取得
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PanelError::NoDocument)?;
        Ok(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ElementLookup for WebDocument {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlElement>() {
            Ok(html) => Some(html),
            Err(_) => {
                log::warn!("#{} is not an HtmlElement", id);
                None
            }
        }
    }
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> Result<()> {
        HtmlElement::style(self)
            .set_property(property, value)
            .map_err(|e| PanelError::style(property, format!("{:?}", e)))
    }

    fn style(&self, property: &str) -> Option<String> {
        HtmlElement::style(self)
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }
}
