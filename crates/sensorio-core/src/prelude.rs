pub use crate::app::App;
pub use sensorio_types::prelude::*;

// vim: ts=4
