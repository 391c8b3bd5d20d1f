//! Tagged value type that lets one binding hold different kinds of data
//! over its lifetime, together with a descriptive kind for each variant.

use imstr::ImString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
/// Descriptive kind of a [`DynValue`], reported alongside the value itself.
pub enum ValueKind {
    #[display(fmt = "int")]
    Int,
    #[display(fmt = "str")]
    Str,
}

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::From,
    derive_more::TryInto,
    derive_more::Display,
)]
/// A value whose kind travels with the value rather than with the binding.
///
/// Reassigning a `mut` binding of this type from one variant to another is
/// the static-host rendition of dynamic rebinding: the name stays, the kind
/// changes with the value.
pub enum DynValue {
    /// Integer numerals
    Int(i64),
    /// An immutable string
    Str(ImString),
}

impl DynValue {
    /// Kind of the value currently held.
    pub fn kind(&self) -> ValueKind {
        match self {
            DynValue::Int(_) => ValueKind::Int,
            DynValue::Str(_) => ValueKind::Str,
        }
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Str(ImString::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn rebinding_reports_the_new_kind() {
        let mut x = DynValue::from(5);
        assert_eq!(x.to_string(), "5");
        assert_eq!(x.kind(), ValueKind::Int);

        x = DynValue::from("Hello");
        assert_eq!(x.to_string(), "Hello");
        assert_eq!(x.kind(), ValueKind::Str);
    }

    #[test_case(DynValue::from(0), "int" ; "integer value reads int")]
    #[test_case(DynValue::from(-7), "int" ; "negative integer reads int")]
    #[test_case(DynValue::from("text"), "str" ; "string value reads str")]
    #[test_case(DynValue::from(""), "str" ; "empty string reads str")]
    fn kind_displays_its_short_name(value: DynValue, expected: &str) {
        assert_eq!(value.kind().to_string(), expected);
    }
}
