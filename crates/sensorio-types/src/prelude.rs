//! Common imports used across the workspace.

pub use crate::auth_adapter::AuthAdapter;
pub use crate::error::{Error, SnResult};
pub use crate::meta_adapter::MetaAdapter;
pub use crate::types::{Patch, Timestamp};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
