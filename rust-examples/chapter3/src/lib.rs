//! Chapter 3: Types, Abstraction and Ownership
//!
//! This chapter explores how data is shaped and shared:
//! - Structs and methods (`&self` vs `&mut self`)
//! - Traits as capability sets, with static and dynamic dispatch
//! - References and boxes: borrowing, mutation through `&mut`, heap allocation
//! - Deferred cleanup tied to scope exit (RAII)

// Modules
pub mod section_3_1; // Structs
pub mod section_3_2; // Traits
pub mod section_3_3; // References
pub mod section_3_4; // Deferred Cleanup

pub use section_3_1::{Person, demonstrate_structs};
pub use section_3_2::{AnyShape, Circle, Rectangle, Shape, demonstrate_traits};
pub use section_3_3::demonstrate_references;
pub use section_3_4::demonstrate_defer;
