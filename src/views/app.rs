// ============================================================================
// APP VIEW - Elige pantalla según el Screen del controlador
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::utils::{NEAR_DOCS_URL, NEAR_EXAMPLES_URL};
use crate::viewmodels::{Screen, SignedInScreen, ViewController};
use crate::views::props_form::render_props_form;
use crate::views::recent_props::render_recent_props;
use crate::views::shared::render_sign_out_button;
use crate::views::sign_in::render_sign_in;

/// Renderizar la app completa
pub fn render_app(controller: &ViewController) -> Result<Element, JsValue> {
    match controller.screen() {
        Screen::SignedOut => render_sign_in(controller),
        Screen::SignedIn(screen) => render_signed_in(&screen, controller),
    }
}

fn render_signed_in(screen: &SignedInScreen, controller: &ViewController) -> Result<Element, JsValue> {
    log::info!("🎬 [APP] Pantalla principal para {}", screen.account_id);

    let main = ElementBuilder::new("main")?
        .child(ElementBuilder::new("h1")?.text(&screen.greeting()).build())?
        .child(render_props_form(screen, controller)?)?
        .child(ElementBuilder::new("h2")?.text("Recent props").build())?
        .child(render_recent_props(screen)?)?
        .child(ElementBuilder::new("h2")?.text("Your props").build())?
        .child(
            ElementBuilder::new("p")?
                .text("You haven't given or received any props yet.")
                .build(),
        )?
        .child(ElementBuilder::new("hr")?.build())?
        .child(render_footer()?)?
        .build();

    let wrapper = ElementBuilder::new("div")?.class("signed-in").build();
    append_child(&wrapper, &render_sign_out_button(controller)?)?;
    append_child(&wrapper, &main)?;
    Ok(wrapper)
}

fn render_footer() -> Result<Element, JsValue> {
    let docs = external_link(NEAR_DOCS_URL, "the NEAR docs")?;
    let examples = external_link(NEAR_EXAMPLES_URL, "example apps")?;

    let footer = ElementBuilder::new("p")?.build();
    footer.append_with_str_1("If you want to build more apps like this, check out ")?;
    append_child(&footer, &docs)?;
    footer.append_with_str_1(" or look through some ")?;
    append_child(&footer, &examples)?;
    footer.append_with_str_1(".")?;
    Ok(footer)
}

fn external_link(href: &str, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .attr("href", href)?
        .attr("target", "_blank")?
        .attr("rel", "noreferrer")?
        .text(label)
        .build())
}
