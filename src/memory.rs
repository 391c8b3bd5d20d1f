//! Ownership, borrowing, and shared-ownership walkthrough.

use std::rc::Rc;

/// Run the memory-management walkthrough: a move, both borrow flavors, a
/// scoped drop, and reference counts around an inner scope.
pub fn demonstrate_memory_management() {
    let s1 = String::from("hello");
    println!("Created string: {s1}");

    // s1 is moved from; using it past this point would not compile
    let s2 = s1;
    println!("Ownership transferred to s2: {s2}");

    let s3 = String::from("world");
    print_borrowed(&s3);
    println!("After borrowing, s3 is still valid: {s3}");

    let mut s4 = String::from("hello");
    append_word(&mut s4);
    println!("After mutable borrowing, s4 is: {s4}");

    {
        let s5 = String::from("temporary");
        println!("Inside scope: {s5}");
        // dropped here
    }

    let shared = Rc::new(String::from("shared"));
    println!("Created shared data, ref count: {}", Rc::strong_count(&shared));
    {
        let first = Rc::clone(&shared);
        let second = Rc::clone(&shared);
        println!("Added two references, ref count: {}", Rc::strong_count(&shared));
        println!("Shared data via first: {first}");
        println!("Shared data via second: {second}");
    }
    println!("After inner scope, ref count: {}", Rc::strong_count(&shared));
}

fn print_borrowed(s: &str) {
    println!("Borrowed: {s}");
}

fn append_word(s: &mut String) {
    s.push_str(" world");
    println!("Modified borrowed string: {s}");
}
