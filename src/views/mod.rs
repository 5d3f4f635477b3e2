pub mod app;
pub mod props_form;
pub mod recent_props;
pub mod shared;
pub mod sign_in;

pub use app::render_app;
pub use props_form::render_props_form;
pub use recent_props::render_recent_props;
pub use sign_in::render_sign_in;
