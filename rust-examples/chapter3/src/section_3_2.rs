//! Section 3.2: Traits
//!
//! A trait names a capability set: the operations a type must provide to be
//! used polymorphically. Here the capability set is [`Shape`], with two
//! variants, [`Rectangle`] and [`Circle`].
//!
//! Two dispatch styles:
//!
//! - **Static**: `fn f<S: Shape + ?Sized>(s: &S)` is monomorphised per type
//! - **Dynamic**: `&dyn Shape` / `Box<dyn Shape>` goes through a vtable and
//!   lets different types share one collection
//!
//! Because the variant set is closed, a flat enum ([`AnyShape`]) works just
//! as well and needs no boxing.
//!
//! Dimensions are validated on construction: negative or non-finite values
//! are rejected, so every shape that exists has a non-negative area and
//! perimeter.

use std::f64::consts::PI;
use std::io::Write;

use tour_common::console::heading;
use tour_common::{Result, TourError};

/// Trait defining the shape capability set
pub trait Shape {
    /// Display name of the variant, e.g. `"Rectangle"`.
    fn name(&self) -> &'static str;
    /// Enclosed area; never negative for a validated shape.
    fn area(&self) -> f64;
    /// Length of the boundary; never negative for a validated shape.
    fn perimeter(&self) -> f64;
}

fn dimension(shape: &'static str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(TourError::InvalidDimension {
            shape,
            field,
            value,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// # Examples
    /// ```
    /// use tour_chapter3::{Rectangle, Shape};
    ///
    /// let rect = Rectangle::new(5.0, 3.0).unwrap();
    /// assert_eq!(rect.area(), 15.0);
    /// assert_eq!(rect.perimeter(), 16.0);
    ///
    /// assert!(Rectangle::new(-1.0, 3.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Rectangle {
            width: dimension("rectangle", "width", width)?,
            height: dimension("rectangle", "height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Circle {
            radius: dimension("circle", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// Tagged union over the closed set of shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyShape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape for AnyShape {
    fn name(&self) -> &'static str {
        match self {
            AnyShape::Rectangle(r) => r.name(),
            AnyShape::Circle(c) => c.name(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.area(),
            AnyShape::Circle(c) => c.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.perimeter(),
            AnyShape::Circle(c) => c.perimeter(),
        }
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rect: Rectangle) -> Self {
        AnyShape::Rectangle(rect)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        AnyShape::Circle(circle)
    }
}

/// Formats both quantities with two decimals.
pub fn shape_report<S: Shape + ?Sized>(shape: &S) -> String {
    format!(
        "area: {:.2}, perimeter: {:.2}",
        shape.area(),
        shape.perimeter()
    )
}

/// Writes `"<Name> - area: X, perimeter: Y"` for any shape.
pub fn print_shape_info<W: Write, S: Shape + ?Sized>(out: &mut W, shape: &S) -> Result<()> {
    writeln!(out, "{} - {}", shape.name(), shape_report(shape))?;
    Ok(())
}

/// Sums the areas of a heterogeneous collection.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

pub fn demonstrate_traits<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Traits")?;

    let rect = Rectangle::new(5.0, 3.0)?;
    let circle = Circle::new(4.0)?;

    // Static dispatch
    print_shape_info(out, &rect)?;
    print_shape_info(out, &circle)?;

    // Dynamic dispatch through a shared collection
    let boxed: Vec<Box<dyn Shape>> = vec![Box::new(rect), Box::new(circle)];
    writeln!(out, "total area: {:.2}", total_area(&boxed))?;

    // Enum dispatch, no boxing
    let tagged: [AnyShape; 2] = [rect.into(), circle.into()];
    let names: Vec<&str> = tagged.iter().map(Shape::name).collect();
    writeln!(out, "tagged shapes: {}", names.join(", "))?;

    match Circle::new(-1.0) {
        Ok(circle) => print_shape_info(out, &circle)?,
        Err(err) => writeln!(out, "rejected: {err}")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;
    use tour_common::console::captured;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rectangle() {
        let rect = Rectangle::new(5.0, 3.0).unwrap();
        assert_eq!(rect.area(), 15.0);
        assert_eq!(rect.perimeter(), 16.0);
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 3.0);
        assert_eq!(shape_report(&rect), "area: 15.00, perimeter: 16.00");
    }

    #[test]
    fn test_circle() {
        let circle = Circle::new(4.0).unwrap();
        assert!(approx_eq(circle.area(), PI * 16.0));
        assert!(approx_eq(circle.perimeter(), 8.0 * PI));
        assert_eq!(shape_report(&circle), "area: 50.27, perimeter: 25.13");
    }

    #[test]
    fn test_zero_dimensions_are_allowed() {
        let line = Rectangle::new(0.0, 7.0).unwrap();
        assert_eq!(line.area(), 0.0);
        assert_eq!(line.perimeter(), 14.0);

        let point = Circle::new(0.0).unwrap();
        assert_eq!(point.area(), 0.0);
    }

    #[test_case(-1.0, 3.0, "width"; "negative width")]
    #[test_case(5.0, -0.5, "height"; "negative height")]
    #[test_case(f64::NAN, 3.0, "width"; "nan width")]
    #[test_case(5.0, f64::INFINITY, "height"; "infinite height")]
    fn rejects_bad_rectangles(width: f64, height: f64, bad_field: &str) {
        match Rectangle::new(width, height) {
            Err(TourError::InvalidDimension { shape, field, .. }) => {
                assert_eq!(shape, "rectangle");
                assert_eq!(field, bad_field);
            }
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_circle() {
        assert!(matches!(
            Circle::new(-2.0),
            Err(TourError::InvalidDimension { field: "radius", .. })
        ));
        assert!(Circle::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_enum_matches_trait_objects() {
        let rect = Rectangle::new(2.0, 3.0).unwrap();
        let circle = Circle::new(1.5).unwrap();
        let tagged: Vec<AnyShape> = vec![rect.into(), circle.into()];
        let boxed: Vec<Box<dyn Shape>> = vec![Box::new(rect), Box::new(circle)];

        for (t, b) in tagged.iter().zip(&boxed) {
            assert_eq!(t.name(), b.name());
            assert_eq!(t.area(), b.area());
            assert_eq!(t.perimeter(), b.perimeter());
        }
        assert!(approx_eq(
            total_area(&boxed),
            tagged.iter().map(Shape::area).sum()
        ));
    }

    #[test]
    fn test_total_area_of_nothing() {
        assert_eq!(total_area(&[]), 0.0);
    }

    #[test]
    fn test_demonstrate_traits() {
        let mut out = Vec::new();
        demonstrate_traits(&mut out).unwrap();
        let text = captured(&out);

        assert!(text.contains("Rectangle - area: 15.00, perimeter: 16.00"));
        assert!(text.contains("Circle - area: 50.27, perimeter: 25.13"));
        assert!(text.contains("total area: 65.27"));
        assert!(text.contains("tagged shapes: Rectangle, Circle"));
        assert!(text.contains("rejected: invalid circle radius: -1"));
    }

    proptest! {
        /// Property: constructible shapes never report negative quantities
        #[test]
        fn prop_non_negative_rectangle(w in 0.0f64..1e6, h in 0.0f64..1e6) {
            let rect = Rectangle::new(w, h).unwrap();
            prop_assert!(rect.area() >= 0.0);
            prop_assert!(rect.perimeter() >= 0.0);
        }

        #[test]
        fn prop_non_negative_circle(r in 0.0f64..1e6) {
            let circle = Circle::new(r).unwrap();
            prop_assert!(circle.area() >= 0.0);
            prop_assert!(circle.perimeter() >= 0.0);
        }

        #[test]
        fn prop_negative_dimensions_rejected(r in -1e6f64..-1e-9) {
            prop_assert!(Circle::new(r).is_err());
            prop_assert!(Rectangle::new(r, 1.0).is_err());
            prop_assert!(Rectangle::new(1.0, r).is_err());
        }
    }
}
