//! Section 3.1: Structs
//!
//! A struct groups named fields. Methods live in an `impl` block and say
//! how they use the receiver:
//!
//! - `&self` reads the value (like a value receiver)
//! - `&mut self` mutates it in place (like a pointer receiver)
//! - `self` consumes it
//!
//! # Key Rust Concepts
//!
//! | Call | What the callee gets | Caller's record after a birthday |
//! |------|----------------------|----------------------------------|
//! | `birthday_in_place(&mut p)` | exclusive borrow | age + 1 |
//! | `birthday_on_copy(p.clone())` | an owned duplicate | unchanged |
//!
//! The compiler enforces the distinction: a function taking `&mut Person`
//! can only be called with an explicit `&mut`, and a function taking
//! `Person` by value moves (or is handed a clone of) the caller's record.

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// A labelled record whose age can be bumped in place.
///
/// # Example
///
/// ```
/// use tour_chapter3::Person;
///
/// let mut person = Person::new("Zhang San", 25, "Beijing");
/// person.birthday();
/// assert_eq!(person.age, 26);
/// person.birthday();
/// assert_eq!(person.age, 27);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    /// Positional construction, the counterpart to a struct literal.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
        }
    }

    /// A one-line introduction. Only reads the record.
    pub fn greet(&self) -> String {
        format!("Hello, I'm {} from {}", self.name, self.city)
    }

    /// Increments `age` by one. Always succeeds; the age stops at `u32::MAX`.
    pub fn birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }
}

/// Celebrates through an exclusive borrow: the caller sees the new age.
pub fn birthday_in_place(person: &mut Person) {
    person.birthday();
}

/// Celebrates on an owned value and hands it back; whatever the caller
/// cloned it from is left as it was.
#[must_use]
pub fn birthday_on_copy(mut person: Person) -> Person {
    person.birthday();
    person
}

pub fn demonstrate_structs<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Structs")?;

    // Struct literal with named fields
    let mut person1 = Person {
        name: "Zhang San".to_string(),
        age: 25,
        city: "Beijing".to_string(),
    };

    // Positional constructor
    let person2 = Person::new("Li Si", 30, "Shanghai");

    writeln!(out, "{}", person1.greet())?;
    writeln!(out, "before birthday: {}", person1.age)?;
    person1.birthday();
    writeln!(out, "after birthday: {}", person1.age)?;

    writeln!(out, "person2: {person2:?}")?;

    // Same starting point, two ways of passing
    let mut borrowed = Person::new("Wang Wu", 40, "Shenzhen");
    let copied = borrowed.clone();

    birthday_in_place(&mut borrowed);
    let celebrated = birthday_on_copy(copied.clone());

    writeln!(
        out,
        "by reference: {} | by value: caller keeps {}, callee returned {}",
        borrowed.age, copied.age, celebrated.age
    )?;

    Ok(())
}
