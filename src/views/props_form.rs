// ============================================================================
// PROPS FORM VIEW - Formulario "Give props"
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::incremental::FIELDSET_ID;
use crate::dom::{append_child, field_value, on_submit, ElementBuilder};
use crate::utils::{DEFAULT_PROPS_MESSAGE, RECEIVER_PLACEHOLDER};
use crate::viewmodels::{SignedInScreen, ViewController};

pub fn render_props_form(screen: &SignedInScreen, controller: &ViewController) -> Result<Element, JsValue> {
    let receiver_input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("name", "receiver")?
        .attr("placeholder", RECEIVER_PLACEHOLDER)?
        .build();

    let receiver_row = ElementBuilder::new("p")?.text("Give props to:").build();
    append_child(&receiver_row, &receiver_input)?;

    let note_label = ElementBuilder::new("label")?
        .class("note-label")
        .text("Add a note")
        .build();

    let message_area = ElementBuilder::new("textarea")?
        .attr("name", "message")?
        .class("note-input")
        .text(DEFAULT_PROPS_MESSAGE)
        .build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-give-props")
        .text("Give props")
        .build();

    let fieldset = ElementBuilder::new("fieldset")?
        .id(FIELDSET_ID)?
        .flag("disabled", screen.form_disabled)?
        .child(receiver_row)?
        .child(note_label)?
        .child(message_area)?
        .child(submit_btn)?
        .build();

    let form = ElementBuilder::new("form")?.child(fieldset)?.build();

    {
        let controller = controller.clone();
        on_submit(&form, move |e| {
            e.prevent_default();

            let Some(form) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                log::error!("❌ [FORM] Submit sin formulario");
                return;
            };
            let fields = field_value(&form, "input[name=\"receiver\"]")
                .and_then(|receiver| Ok((receiver, field_value(&form, "textarea")?)));
            let (receiver, message) = match fields {
                Ok(values) => values,
                Err(err) => {
                    log::error!("❌ [FORM] No se pudieron leer los campos: {:?}", err);
                    return;
                }
            };

            let controller = controller.clone();
            spawn_local(async move {
                // El error ya se mostró con alert; aquí queda en consola
                if let Err(e) = controller.submit(receiver, message).await {
                    log::error!("❌ [FORM] giveProps falló: {}", e);
                }
            });
        })?;
    }

    Ok(form)
}
