pub mod prop;

pub use prop::{GivePropsArgs, PropRecord};
