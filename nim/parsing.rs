//! Parsing utilities

#[must_use]
#[derive(Debug, Clone, Copy)]
/// `const`-capable string parser
pub struct Parser<'s> {
    /// Remaining unparsed input
    pub input: &'s str,
}

macro_rules! try_option {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}
pub(crate) use try_option;

macro_rules! lexeme {
    ($p:expr, $f:expr) => {{
        let p = $p.trim_whitespace();
        match $f(p) {
            None => None,
            Some((p, val)) => {
                let p = p.trim_whitespace();
                Some((p, val))
            }
        }
    }};
}
pub(crate) use lexeme;

impl<'s> Parser<'s> {
    /// Create new parser marking the beginning of the input
    pub const fn new(input: &'s str) -> Parser<'s> {
        Parser { input }
    }

    /// Check if the whole input has been consumed
    pub const fn is_empty(self) -> bool {
        self.input.is_empty()
    }

    const fn from_bytes(bs: &'s [u8]) -> Parser<'s> {
        Parser {
            // const-hack
            input: match core::str::from_utf8(bs) {
                Ok(input) => input,
                Err(_) => unreachable!(),
            },
        }
    }

    /// Remove whitespace from the beginning of the input
    pub const fn trim_whitespace(self) -> Parser<'s> {
        let mut bs = self.input.as_bytes();
        loop {
            match bs {
                [b'\t' | b'\n' | b'\r' | b' ', rest @ ..] => bs = rest,
                _ => return Parser::from_bytes(bs),
            }
        }
    }

    /// Parse one ascii char if input is non-empty
    pub const fn parse_any_ascii_char(self) -> Option<(Parser<'s>, char)> {
        match self.input.as_bytes() {
            [b, rest @ ..] if b.is_ascii() => Some((Parser::from_bytes(rest), *b as char)),
            _ => None,
        }
    }

    /// Parse one ascii char if input is non-empty and it matches the `expected`
    pub const fn parse_ascii_char(self, expected: char) -> Option<Parser<'s>> {
        match self.parse_any_ascii_char() {
            Some((p, c)) if c == expected => Some(p),
            _ => None,
        }
    }

    /// Parse unsigned number
    pub const fn parse_u32(self) -> Option<(Parser<'s>, u32)> {
        let mut bs = self.input.as_bytes();

        let mut parsed_anything = false;
        let mut acc: u32 = 0;

        loop {
            match bs {
                [
                    b @ (b'0' | b'1' | b'2' | b'3' | b'4' | b'5' | b'6' | b'7' | b'8' | b'9'),
                    rest @ ..,
                ] => {
                    parsed_anything = true;
                    acc = try_option!(acc.checked_mul(10));
                    acc = try_option!(acc.checked_add((*b - b'0') as u32));
                    bs = rest;
                }
                _ => {
                    if !parsed_anything {
                        return None;
                    }

                    return Some((Parser::from_bytes(bs), acc));
                }
            }
        }
    }

    /// Parse comma separated list of unsigned numbers, whitespace around elements is allowed
    pub fn parse_u32_list(self) -> Option<(Parser<'s>, Vec<u32>)> {
        let mut values = Vec::new();
        let (mut p, first) = try_option!(lexeme!(self, Parser::parse_u32));
        values.push(first);

        while let Some(after_comma) = p.parse_ascii_char(',') {
            let (next, value) = try_option!(lexeme!(after_comma, Parser::parse_u32));
            values.push(value);
            p = next;
        }

        Some((p, values))
    }
}
