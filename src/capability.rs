//! Capability-checked uppercase transform over heterogeneous sequences.

use imstr::ImString;

use crate::value::DynValue;

/// Case-conversion capability, probed per element.
///
/// `upcase` answers `Some` with the converted value when the capability is
/// present and `None` when it is absent. Absence is a normal case, not an
/// error: callers fall back to the original element.
pub trait Upcase: Sized {
    fn upcase(&self) -> Option<Self>;
}

impl Upcase for DynValue {
    fn upcase(&self) -> Option<Self> {
        match self {
            DynValue::Str(s) => Some(DynValue::Str(ImString::from(s.to_uppercase()))),
            DynValue::Int(_) => None,
        }
    }
}

impl Upcase for ImString {
    fn upcase(&self) -> Option<Self> {
        Some(ImString::from(self.to_uppercase()))
    }
}

impl Upcase for i64 {
    fn upcase(&self) -> Option<Self> {
        None
    }
}

/// Replace each element by its uppercase form when it supports one, passing
/// everything else through unchanged. Length and order are preserved.
pub fn process_sequence<T: Upcase>(items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .map(|item| match item.upcase() {
            Some(upper) => upper,
            None => item,
        })
        .collect()
}
