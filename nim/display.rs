//! Display utilities

use std::fmt::{self, Display, Write};

fn sep(w: &mut impl Write, separator: &str, xs: &[impl Display]) -> fmt::Result {
    for (idx, v) in xs.iter().enumerate() {
        if idx != 0 {
            write!(w, "{}", separator)?;
        }
        write!(w, "{}", v)?;
    }
    Ok(())
}

#[inline]
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    sep(w, ", ", xs)
}

fn bracket<W>(
    w: &mut W,
    left: &impl Display,
    right: &impl Display,
    middle: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result
where
    W: Write,
{
    write!(w, "{}", left)?;
    middle(w)?;
    write!(w, "{}", right)?;
    Ok(())
}

pub fn brackets<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    bracket(w, &"[", &"]", middle)
}

/// Draw piles as rows of items, one pile per line, numbered from 1
pub fn pile_rows(w: &mut impl Write, counts: &[u32], item: char) -> fmt::Result {
    let width = counts.len().to_string().len();
    for (idx, &count) in counts.iter().enumerate() {
        write!(w, "{:>width$} | ", idx + 1, width = width)?;
        for _ in 0..count {
            write!(w, "{} ", item)?;
        }
        writeln!(w, "({})", count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_rows() {
        let mut out = String::new();
        pile_rows(&mut out, &[2, 0], 'o').unwrap();
        assert_eq!(out, "1 | o o (2)\n2 | (0)\n");
    }
}
