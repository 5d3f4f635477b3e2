// ============================================================================
// RECENT PROPS VIEW - Lista de props recientes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::RECENT_PROPS_ID;
use crate::dom::ElementBuilder;
use crate::models::PropRecord;
use crate::viewmodels::SignedInScreen;

/// Contenedor `#recent-props` con sus items
pub fn render_recent_props(screen: &SignedInScreen) -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("div")?.id(RECENT_PROPS_ID)?.class("recent-props");
    for item in render_recent_props_items(screen)? {
        list = list.child(item)?;
    }
    Ok(list.build())
}

/// Items sueltos (también los usa la actualización incremental)
pub fn render_recent_props_items(screen: &SignedInScreen) -> Result<Vec<Element>, JsValue> {
    if let Some(error) = &screen.load_error {
        let line = ElementBuilder::new("p")?
            .class("load-error")
            .text(&format!("Could not load recent props: {}", error))
            .build();
        return Ok(vec![line]);
    }

    screen.records.iter().map(render_prop_record).collect()
}

fn render_prop_record(record: &PropRecord) -> Result<Element, JsValue> {
    let mut headline = ElementBuilder::new("p")?.text(&record.headline());
    if let Some(given_at) = record.given_at() {
        headline = headline.attr("title", &given_at.format("%Y-%m-%d %H:%M UTC").to_string())?;
    }

    ElementBuilder::new("div")?
        .attr("data-key", &record.key())?
        .child(headline.build())?
        .child(ElementBuilder::new("blockquote")?.text(&record.message).build())
        .map(ElementBuilder::build)
}
