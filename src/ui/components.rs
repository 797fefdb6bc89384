//! UI Components module - business-specific composite components
//!
//! Components combine widgets and primitives with application logic and are
//! the only UI layer that imports from `crate::app`.

pub mod busy_overlay;
pub mod dialog;
pub mod form_page;
