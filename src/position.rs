//! Position resolution for warehouse location codes.
//!
//! A bin either carries a structured planar position or a dash-delimited
//! code such as `"A1-5-2"`. Both are resolved into a 3D [`Coordinate`].
//! Resolution never fails: missing or unparseable components become 0.

use serde::{Deserialize, Serialize};

/// Separator between location code segments.
const SEGMENT_SEPARATOR: char = '-';

/// A location as supplied by the inventory system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// Structured planar coordinate. Always resolves with `z = 0`.
    Grid { x: f64, y: f64 },
    /// Dash-delimited code, e.g. `"A1-B2-C3"`.
    Code(String),
}

impl Default for Position {
    fn default() -> Self {
        Position::Grid { x: 0.0, y: 0.0 }
    }
}

impl Position {
    pub fn grid(x: f64, y: f64) -> Self {
        Position::Grid { x, y }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Position::Code(code.into())
    }

    /// String form used on route nodes: `"x,y"` or the original code.
    pub fn render(&self) -> String {
        match self {
            Position::Grid { x, y } => format!("{},{}", x, y),
            Position::Code(code) => code.clone(),
        }
    }

    pub fn resolve(&self) -> ResolvedPosition {
        match self {
            Position::Grid { x, y } => ResolvedPosition {
                x: Component::Parsed(*x),
                y: Component::Parsed(*y),
                z: Component::Parsed(0.0),
            },
            Position::Code(code) => parse_code(code),
        }
    }
}

/// Canonical 3D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        euclidean_distance(self, other)
    }
}

/// One resolved axis value, remembering whether it was present in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Parsed(f64),
    Defaulted,
}

impl Component {
    pub fn value(self) -> f64 {
        match self {
            Component::Parsed(v) => v,
            Component::Defaulted => 0.0,
        }
    }

    pub fn is_defaulted(self) -> bool {
        matches!(self, Component::Defaulted)
    }
}

/// Resolution result keeping track of defaulted components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    pub x: Component,
    pub y: Component,
    pub z: Component,
}

impl ResolvedPosition {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x.value(), self.y.value(), self.z.value())
    }

    /// True when any component fell back to 0.
    pub fn is_degenerate(&self) -> bool {
        self.x.is_defaulted() || self.y.is_defaulted() || self.z.is_defaulted()
    }
}

/// Resolves any accepted position form into a coordinate.
pub fn resolve_position(position: &Position) -> Coordinate {
    position.resolve().coordinate()
}

/// Straight-line distance in coordinate units.
pub fn euclidean_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dz = to.z - from.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

fn parse_code(code: &str) -> ResolvedPosition {
    let mut segments = code.split(SEGMENT_SEPARATOR);

    let x = segments
        .next()
        .and_then(|segment| segment.chars().next())
        .map_or(Component::Defaulted, |c| Component::Parsed(f64::from(first_code_unit(c))));

    let y = parse_segment(segments.next());
    let z = parse_segment(segments.next());

    ResolvedPosition { x, y, z }
}

/// Leading UTF-16 code unit, so astral characters yield their high surrogate.
fn first_code_unit(c: char) -> u16 {
    c.encode_utf16(&mut [0u16; 2])[0]
}

fn parse_segment(segment: Option<&str>) -> Component {
    segment
        .and_then(parse_int_prefix)
        .map_or(Component::Defaulted, Component::Parsed)
}

/// Lenient integer parse in the manner of a radix-less `parseInt`: skips
/// leading whitespace, accepts a sign, reads `0x`/`0X` as hexadecimal and
/// otherwise takes the leading run of decimal digits. Trailing garbage is
/// ignored. Long digit runs are kept as (possibly inexact) floats.
fn parse_int_prefix(segment: &str) -> Option<f64> {
    let trimmed = segment.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = match rest.get(..2) {
        Some("0x" | "0X") => parse_hex_digits(&rest[2..])?,
        _ => parse_decimal_digits(rest)?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_decimal_digits(digits: &str) -> Option<f64> {
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    digits[..len].parse().ok()
}

fn parse_hex_digits(digits: &str) -> Option<f64> {
    let values: Vec<u32> = digits.chars().map_while(|c| c.to_digit(16)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().fold(0.0, |acc, &d| acc * 16.0 + f64::from(d)))
}
