//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; interactivity is expressed
//! through generic Message types and callbacks.

mod toast;

pub use toast::{Toast, ToastEntry, ToastStack, ToastStyle, view_toast};
