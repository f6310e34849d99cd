//! Section 3.2: Shapes Demonstration
//!
//! Walks the same two shapes through every dispatch style the section
//! covers, then shows what happens with a bad dimension.
//!
//! Run with: cargo run -p tour-chapter3 --example shapes_demo

use tour_chapter3::section_3_2::{shape_report, total_area};
use tour_chapter3::{AnyShape, Circle, Rectangle, Shape};

fn describe<S: Shape + ?Sized>(label: &str, shape: &S) {
    println!("  {label:<10} {:<10} {}", shape.name(), shape_report(shape));
}

fn main() -> tour_common::Result<()> {
    println!("=== Section 3.2: Traits as Capability Sets ===\n");

    let rect = Rectangle::new(5.0, 3.0)?;
    let circle = Circle::new(4.0)?;

    // =========================================================================
    // Static dispatch: one copy of `describe` per concrete type
    // =========================================================================
    println!("Static dispatch");
    println!("{}", "=".repeat(60));
    describe("generic", &rect);
    describe("generic", &circle);

    // =========================================================================
    // Dynamic dispatch: trait objects share one collection
    // =========================================================================
    println!("\nDynamic dispatch");
    println!("{}", "=".repeat(60));
    let boxed: Vec<Box<dyn Shape>> = vec![Box::new(rect), Box::new(circle)];
    for shape in &boxed {
        describe("dyn", shape.as_ref());
    }
    println!("  total area: {:.2}", total_area(&boxed));

    // =========================================================================
    // Enum dispatch: the variant set is closed, so no vtable is needed
    // =========================================================================
    println!("\nEnum dispatch");
    println!("{}", "=".repeat(60));
    let tagged = [AnyShape::from(rect), AnyShape::from(circle)];
    for shape in &tagged {
        describe("enum", shape);
    }

    // =========================================================================
    // Validation
    // =========================================================================
    println!("\nValidation");
    println!("{}", "=".repeat(60));
    for (width, height) in [(2.0, 2.0), (-2.0, 2.0), (2.0, f64::NAN)] {
        match Rectangle::new(width, height) {
            Ok(rect) => describe("accepted", &rect),
            Err(err) => println!("  rejected   {err}"),
        }
    }

    Ok(())
}
