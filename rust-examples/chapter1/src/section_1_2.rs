//! Section 1.2: Constants
//!
//! `const` items are inlined at every use site and must carry an explicit
//! type. Related constants are grouped either in a module or as associated
//! constants on a type; here HTTP status codes live on [`StatusCode`].

use std::io::Write;

use tour_common::Result;
use tour_common::console::heading;

/// A deliberately short approximation, printed with five decimals.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

/// An HTTP status code with its well-known values as associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const INTERNAL_ERROR: StatusCode = StatusCode(500);

    /// The numeric code.
    pub fn code(self) -> u16 {
        self.0
    }

    /// True for 4xx and 5xx codes.
    ///
    /// # Examples
    /// ```
    /// use tour_chapter1::section_1_2::StatusCode;
    /// assert!(!StatusCode::OK.is_error());
    /// assert!(StatusCode::NOT_FOUND.is_error());
    /// ```
    pub fn is_error(self) -> bool {
        self.0 >= 400
    }
}

pub fn demonstrate_constants<W: Write>(out: &mut W) -> Result<()> {
    // A `const` may be declared inside a function body too
    const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

    heading(out, "Constants")?;

    writeln!(out, "PI = {PI:.5}")?;
    writeln!(
        out,
        "status codes: OK={}, NotFound={}, Error={}",
        StatusCode::OK.code(),
        StatusCode::NOT_FOUND.code(),
        StatusCode::INTERNAL_ERROR.code()
    )?;

    writeln!(out, "seconds per day (computed at compile time): {SECONDS_PER_DAY}")?;

    Ok(())
}
