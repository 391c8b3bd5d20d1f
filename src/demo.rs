//! Scripted walkthrough of the value, capability, greeting, and counter
//! pieces, printed in a fixed order.

use std::ops::Add;

use crate::capability::process_sequence;
use crate::counter::Counter;
use crate::greet::greet;
use crate::printer::pr_seq;
use crate::value::DynValue;

/// Run the dynamic-typing walkthrough.
pub fn demonstrate_type_system() {
    // One binding, two kinds over its lifetime
    let mut x = DynValue::from(5);
    println!("x is {x}, type: {}", x.kind());

    x = DynValue::from("Hello");
    println!("x is now {x}, type: {}", x.kind());

    // Capability-checked uppercase over a mixed sequence
    let items = vec![
        DynValue::from("hello"),
        DynValue::from(123),
        DynValue::from("world"),
    ];
    println!("{}", pr_seq(&process_sequence(items), true));

    // The parameter is bound by Display, so a number is accepted
    println!("{}", greet(123));

    // Each counter owns its own count
    let mut counter = Counter::new();
    println!("{}", counter.increment());
    println!("{}", counter.increment());
}

/// Run the static-typing counterpart: one generic function serving several
/// concrete types, and an explicit narrowing cast.
pub fn demonstrate_generics() {
    println!("add(5, 3): {}", add(5, 3));
    println!("add(5.5, 3.2): {}", add(5.5, 3.2));

    let pi = 3.14159_f64;
    println!("Truncated pi: {}", pi as i64);
}

fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_serves_integers_and_floats() {
        assert_eq!(add(5, 3), 8);
        assert!((add(5.5, 3.2) - 8.7_f64).abs() < 1e-9);
    }
}
