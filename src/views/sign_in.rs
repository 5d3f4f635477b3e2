// ============================================================================
// SIGN IN VIEW - Pantalla sin sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::viewmodels::ViewController;

/// Renderizar prompt de login (un único botón "Sign in")
pub fn render_sign_in(controller: &ViewController) -> Result<Element, JsValue> {
    log::info!("🎬 [SIGN-IN] render_sign_in()");

    let sign_in_btn = ElementBuilder::new("button")?
        .class("btn-sign-in")
        .text("Sign in")
        .build();

    {
        let controller = controller.clone();
        on_click(&sign_in_btn, move |_e| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.sign_in().await {
                    log::error!("❌ [SIGN-IN] Login fallido: {}", e);
                }
            });
        })?;
    }

    let button_row = ElementBuilder::new("p")?.class("sign-in-row").build();
    append_child(&button_row, &sign_in_btn)?;

    ElementBuilder::new("main")?
        .child(ElementBuilder::new("h1")?.text("Welcome to NEAR!").build())?
        .child(
            ElementBuilder::new("p")?
                .text(
                    "To make use of the NEAR blockchain, you need to sign in. \
                     The button below will sign you in using NEAR Wallet.",
                )
                .build(),
        )?
        .child(ElementBuilder::new("p")?.text("Go ahead and click the button below to try it out:").build())?
        .child(button_row)
        .map(ElementBuilder::build)
}
