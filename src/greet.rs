//! Greeting built from a fixed template and any displayable input.

use std::fmt::Display;

/// Interpolate `name` into the fixed `"Hello, "` template.
///
/// The parameter is bound by `Display` rather than by a concrete string
/// type, so a numeric input is accepted and coerced to its textual form.
pub fn greet<N: Display>(name: N) -> String {
    format!("Hello, {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DynValue;

    #[test]
    fn greets_numbers_through_their_display_form() {
        assert_eq!(greet(123), "Hello, 123");
    }

    #[test]
    fn greets_strings() {
        assert_eq!(greet("Alice"), "Hello, Alice");
    }

    #[test]
    fn greets_tagged_values() {
        assert_eq!(greet(DynValue::from(42)), "Hello, 42");
        assert_eq!(greet(DynValue::from("world")), "Hello, world");
    }
}
