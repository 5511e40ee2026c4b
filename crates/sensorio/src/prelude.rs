pub use sensorio_core::app::App;
pub use sensorio_core::extract::Auth;
pub use sensorio_types::prelude::*;

// vim: ts=4
