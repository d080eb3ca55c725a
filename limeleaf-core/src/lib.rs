//! UI state of the LimeLeaf web client that does not depend on a browser.

pub mod follow;
pub mod pagination;
pub mod reaction;
pub mod routes;
pub mod status;
pub mod thread;
pub mod timestamp;
pub mod validate;
