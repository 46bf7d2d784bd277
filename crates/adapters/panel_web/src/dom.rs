//! Display regions and alerts backed by the page's DOM.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use z407_app::ports::{Notifier, PanelRenderer};
use z407_domain::panel::{
    BLUETOOTH_STATUS_ID, CONNECTION_MODE_ID, DetailField, PanelState, STATUS_INDICATOR_ID,
};

/// The three regions the panel writes to, looked up once.
pub struct DomRenderer {
    document: Document,
    indicator: Element,
    connection_mode: Element,
    bluetooth_status: Element,
}

impl DomRenderer {
    /// Find the regions in the current document.
    pub fn from_document() -> Result<Self, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            indicator: element(&document, STATUS_INDICATOR_ID)?,
            connection_mode: element(&document, CONNECTION_MODE_ID)?,
            bluetooth_status: element(&document, BLUETOOTH_STATUS_ID)?,
            document,
        })
    }

    fn write_detail(&self, region: &Element, field: &DetailField) {
        if field.is_bold() && self.write_bold(region, field.text()).is_ok() {
            return;
        }
        region.set_text_content(Some(field.text()));
    }

    /// Replace the region's children with a single `<b>` holding `text`.
    fn write_bold(&self, region: &Element, text: &str) -> Result<(), JsValue> {
        let bold = self.document.create_element("b")?;
        bold.set_text_content(Some(text));
        region.replace_children_with_node_1(&bold)
    }
}

impl PanelRenderer for DomRenderer {
    fn render(&self, state: &PanelState) {
        let class = state.indicator.class();
        self.indicator.set_text_content(Some(state.indicator.label()));
        let classes = self.indicator.class_list();
        // Only fails for empty or whitespace tokens.
        let _ = classes.remove_1(class.opposite().as_str());
        let _ = classes.add_1(class.as_str());

        self.write_detail(&self.connection_mode, &state.connection_mode);
        self.write_detail(&self.bluetooth_status, &state.bluetooth_status);
    }
}

/// `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn from_window() -> Result<Self, JsValue> {
        Ok(Self { window: window()? })
    }
}

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}
