// WASM専用のエントリーポイント

use crate::config::PanelConfig;
use crate::dom::WebDocument;
use crate::error::PanelError;
use crate::panel::SidePanel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // パニック時のエラーメッセージをブラウザコンソールに表示
    console_error_panic_hook::set_once();

    // WebAssembly用のロガーを初期化（ページ内で複数回読み込まれても無視）
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already initialized");
    }

    log::info!("sidenav WASM starting...");
}

fn to_js(err: PanelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn load_config(config_json: Option<String>) -> Result<PanelConfig, JsValue> {
    match config_json {
        Some(json) => PanelConfig::from_json_str(&json).map_err(to_js),
        None => Ok(PanelConfig::default()),
    }
}

/// JS側が所有するサイドパネルハンドル
#[wasm_bindgen]
pub struct NavToggle {
    panel: Rc<RefCell<SidePanel<WebDocument>>>,
}

#[wasm_bindgen]
impl NavToggle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NavToggle, JsValue> {
        Self::with_config(None)
    }

    /// JSON文字列の設定から作成
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: Option<String>) -> Result<NavToggle, JsValue> {
        let config = load_config(config_json)?;
        let document = WebDocument::current().map_err(to_js)?;
        let mut panel = SidePanel::with_config(document, config);
        panel.apply_initial_state().map_err(to_js)?;
        Ok(NavToggle {
            panel: Rc::new(RefCell::new(panel)),
        })
    }

    pub fn toggle(&self) -> Result<(), JsValue> {
        self.panel.borrow_mut().toggle().map_err(to_js)
    }

    pub fn open(&self) -> Result<(), JsValue> {
        self.panel.borrow_mut().open().map_err(to_js)
    }

    pub fn close(&self) -> Result<(), JsValue> {
        self.panel.borrow_mut().close().map_err(to_js)
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.panel.borrow().is_open()
    }

    /// ボタンのクリックでトグルするリスナーを登録
    #[wasm_bindgen(js_name = bindTo)]
    pub fn bind_to(&self, button_id: &str) -> Result<(), JsValue> {
        let document = self.panel.borrow().document().clone();
        let button = document
            .document()
            .get_element_by_id(button_id)
            .ok_or_else(|| to_js(PanelError::element_not_found(button_id)))?;

        let panel = Rc::clone(&self.panel);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            if let Err(err) = panel.borrow_mut().toggle() {
                log::error!("Failed to toggle side panel: {}", err);
            }
        }) as Box<dyn FnMut(_)>);

        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // リスナーはページが閉じるまで生存
        closure.forget();

        log::info!("Side panel toggle bound to #{}", button_id);
        Ok(())
    }
}

/// ページマークアップ用の簡易バインド
/// ハンドルを生成してボタンに結び付け、そのハンドルを返す
#[wasm_bindgen(js_name = bindToggle)]
pub fn bind_toggle(button_id: &str, config_json: Option<String>) -> Result<NavToggle, JsValue> {
    let toggle = NavToggle::with_config(config_json)?;
    toggle.bind_to(button_id)?;
    Ok(toggle)
}
