// ============================================================================
// ALERT DIALOG - Modal notices with a single "OK" button
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, detach, document, on_click, ElementBuilder};
use crate::models::Notice;
use crate::services::Notifier;

/// `Notifier` that stacks modal dialogs on top of `<body>`
#[derive(Debug, Clone, Copy, Default)]
pub struct DomNotifier;

impl DomNotifier {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, notice: &Notice) -> Result<(), JsValue> {
        let body = document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("No <body> to attach the dialog to"))?;

        let overlay = render_alert_dialog(notice)?;
        body.append_child(&overlay)?;
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, notice: Notice) {
        log::info!("💬 [ALERT] {}", notice.title);
        if let Err(e) = self.show(&notice) {
            log::error!("❌ [ALERT] Could not show dialog: {:?}", e);
        }
    }
}

pub fn render_alert_dialog(notice: &Notice) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?
        .class("alert-backdrop")
        .build();

    let dialog = ElementBuilder::new("div")?
        .class("alert-dialog")
        .attr("role", "alertdialog")?
        .attr("aria-modal", "true")?
        .child(ElementBuilder::new("h2")?.class("alert-title").text(&notice.title).build())?
        .build();

    if let Some(message) = &notice.message {
        let text = ElementBuilder::new("p")?
            .class("alert-message")
            .text(message)
            .build();
        append_child(&dialog, &text)?;
    }

    let ok_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("alert-ok")
        .text("OK")
        .build();
    {
        let overlay = overlay.clone();
        on_click(&ok_btn, move |_| detach(&overlay))?;
    }

    append_child(&dialog, &ok_btn)?;
    append_child(&overlay, &dialog)?;
    Ok(overlay)
}
