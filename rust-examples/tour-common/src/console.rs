//! # Console Helpers
//!
//! Every demonstration writes through an `io::Write` sink so the driver can
//! hand it stdout while tests hand it a `Vec<u8>`.
//!
//! ## Example
//!
//! ```
//! use tour_common::console::heading;
//!
//! let mut out = Vec::new();
//! heading(&mut out, "Variables").unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "\n=== Variables ===\n");
//! ```

use std::io::Write;

use crate::Result;

/// Width of the rule drawn by [`banner`].
pub const BANNER_WIDTH: usize = 40;

/// Writes a section heading preceded by a blank line.
pub fn heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    Ok(())
}

/// Writes a framed banner: a rule, each line indented, then another rule.
pub fn banner<W: Write>(out: &mut W, lines: &[&str]) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    for line in lines {
        writeln!(out, "     {line}")?;
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Renders a sequence as `[a, b, c]`, the way `{:?}` does for numbers but
/// without quoting strings.
pub fn bracketed<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Converts captured output into a `String` for assertions.
///
/// Invalid UTF-8 is replaced rather than rejected; demos only write text.
pub fn captured(out: &[u8]) -> String {
    String::from_utf8_lossy(out).into_owned()
}
