//! Chapter 2: Control Flow and Functions
//!
//! This chapter covers how a program decides and repeats:
//! - `if`/`else` as an expression, `if let`
//! - `for`, `while` and `loop` (which can return a value through `break`)
//! - `match` over values, ranges and guards
//! - Functions, tuple returns, `Result` for fallible work, closures

pub mod section_2_1; // if/else
pub mod section_2_2; // Loops
pub mod section_2_3; // match
pub mod section_2_4; // Functions

// Re-export commonly used items.
pub use section_2_1::{Grade, demonstrate_if_else, grade};
pub use section_2_2::demonstrate_loops;
pub use section_2_3::demonstrate_match;
pub use section_2_4::{demonstrate_functions, divide};
