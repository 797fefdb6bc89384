//! Low-level Widget trait implementations

mod spinner_ring;

pub use spinner_ring::{SpinnerRing, view_spinner_ring};
