pub mod header;

pub use header::render_sign_out_button;
