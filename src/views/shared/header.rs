// ============================================================================
// HEADER - Botón de cierre de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::viewmodels::ViewController;

/// Botón "Sign out" (arriba a la derecha)
pub fn render_sign_out_button(controller: &ViewController) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("link sign-out")
        .text("Sign out")
        .build();

    let controller = controller.clone();
    on_click(&button, move |_e| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.sign_out().await;
        });
    })?;

    Ok(button)
}
