//! Chapter 1: Values and Collections
//!
//! This chapter covers the raw material every program is built from:
//! - Bindings: `let`, type inference, mutability, shadowing
//! - Constants and grouped constants
//! - Primitive types: integers, floats, booleans, strings, chars
//! - Fixed arrays, growable vectors and borrowed slices
//! - Associative maps: hashed, ordered and persistent

pub mod section_1_1; // Variables
pub mod section_1_2; // Constants
pub mod section_1_3; // Primitive Types
pub mod section_1_4; // Arrays and Slices
pub mod section_1_5; // Maps

// Re-export commonly used items.
pub use section_1_1::demonstrate_variables;
pub use section_1_2::demonstrate_constants;
pub use section_1_3::demonstrate_data_types;
pub use section_1_4::demonstrate_arrays_and_slices;
pub use section_1_5::demonstrate_maps;
