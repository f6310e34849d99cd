//! Section 3.4 demo: deferred cleanup on its own
//!
//! Run with: cargo run -p tour-chapter3 --bin section_3_4_demo

use std::io::{self, Write};

use tour_chapter3::section_3_4::demonstrate_defer;

fn main() -> tour_common::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║   Section 3.4: cleanup runs in LIFO order    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝")?;

    demonstrate_defer(&mut out)?;

    writeln!(out)?;
    writeln!(out, "Registered [deferred 1, deferred 2], ran [deferred 2, deferred 1].")?;
    Ok(())
}
