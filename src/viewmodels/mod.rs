pub mod screen;
pub mod view_controller;

pub use screen::{Screen, SignedInScreen};
pub use view_controller::ViewController;
