//! Calibration window geometry in X notation (`WxH+X+Y`).

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

impl FromStr for Geometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid geometry '{}'. Expected <w>x<h>+<x>+<y>", s);

        let (width, rest) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let (height, offsets) = match rest.find(['+', '-']) {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        let (x, y) = parse_offsets(offsets).ok_or_else(invalid)?;

        Ok(Geometry {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
            x,
            y,
        })
    }
}

impl TryFrom<String> for Geometry {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// `+X+Y`, `-X+Y`, ... or nothing.
fn parse_offsets(s: &str) -> Option<(i32, i32)> {
    if s.is_empty() {
        return Some((0, 0));
    }
    let second = s[1..].find(['+', '-'])? + 1;
    let (x, y) = s.split_at(second);
    Some((x.parse().ok()?, y.parse().ok()?))
}
