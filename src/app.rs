// ============================================================================
// APP - Raíz de la aplicación (monta la vista del ViewController)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::{update_form_disabled, update_recent_props};
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::IncrementalUpdate;
use crate::utils::APP_ROOT_ID;
use crate::viewmodels::ViewController;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    controller: ViewController,
    root: Element,
}

impl App {
    /// Crear nueva aplicación sobre `#app`
    pub fn new(controller: ViewController) -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", APP_ROOT_ID)))?;

        // Batchear updates con un timeout 0 antes de tocar el DOM
        controller.state().subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        Ok(Self { controller, root })
    }

    /// Re-render completo
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render()");
        set_inner_html(&self.root, "");
        let view = render_app(&self.controller)?;
        append_child(&self.root, &view)
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        let screen = self.controller.screen();
        match update {
            IncrementalUpdate::Form => update_form_disabled(&screen),
            IncrementalUpdate::RecentProps => update_recent_props(&screen),
        }
    }
}

/// Si una actualización incremental no encuentra su nodo, hay que repintar todo
pub(crate) fn is_full_render_error(err: &JsValue) -> bool {
    err.as_string()
        .map(|msg| msg.contains("needs full render"))
        .unwrap_or(false)
}

/// Pantalla mínima cuando no se pudo arrancar
pub fn render_fatal(message: &str) {
    let Some(root) = get_element_by_id(APP_ROOT_ID) else {
        return;
    };
    set_inner_html(&root, "");
    match crate::dom::ElementBuilder::new("p") {
        Ok(builder) => {
            let line = builder.class("load-error").text(message).build();
            if let Err(e) = append_child(&root, &line) {
                log::error!("❌ [APP] No se pudo mostrar el error: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [APP] No se pudo crear el nodo de error: {:?}", e),
    }
}

