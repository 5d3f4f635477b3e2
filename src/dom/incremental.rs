// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo toca el fieldset o la lista; así no se pierde lo escrito en el form
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, set_inner_html, toggle_attribute};
use crate::viewmodels::Screen;
use crate::views::recent_props::render_recent_props_items;

pub const FIELDSET_ID: &str = "fieldset";
pub const RECENT_PROPS_ID: &str = "recent-props";

/// Marcar el error para que App haga re-render completo
fn needs_full_render(what: &str) -> JsValue {
    JsValue::from_str(&format!("{} not found, needs full render", what))
}

/// `disabled` del fieldset según `submitting`
pub fn update_form_disabled(screen: &Screen) -> Result<(), JsValue> {
    let Screen::SignedIn(signed_in) = screen else {
        return Ok(());
    };

    let fieldset = get_element_by_id(FIELDSET_ID).ok_or_else(|| needs_full_render("Fieldset"))?;
    toggle_attribute(&fieldset, "disabled", signed_in.form_disabled)?;
    log::debug!("🔁 [INCREMENTAL] fieldset disabled={}", signed_in.form_disabled);
    Ok(())
}

/// Re-pintar solo los items de "Recent props"
pub fn update_recent_props(screen: &Screen) -> Result<(), JsValue> {
    let Screen::SignedIn(signed_in) = screen else {
        return Ok(());
    };

    let container = get_element_by_id(RECENT_PROPS_ID).ok_or_else(|| needs_full_render("Recent props list"))?;
    set_inner_html(&container, "");
    for item in render_recent_props_items(signed_in)? {
        append_child(&container, &item)?;
    }
    log::debug!("🔁 [INCREMENTAL] {} props pintados", signed_in.records.len());
    Ok(())
}
