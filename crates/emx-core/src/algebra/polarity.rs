//! The ternary alphabet and its triple carrier
//!
//! A [`Polarity`] is one of three symbolic orientations, isomorphic to the
//! integers {-1, 0, 1}. It carries orientation only — the magnitude of any
//! polarity is defined to be zero (the "signed zero" framing). A
//! [`Triple`] is the system's full instantaneous position: an ordered
//! 3-axis combination of polarities, always handled by value.

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// One of the three fundamental orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Negative orientation (−0)
    Minus,
    /// The neutral stillpoint
    Zero,
    /// Positive orientation (+0)
    Plus,
}

impl Polarity {
    /// Underlying integer value in {-1, 0, 1}
    pub const fn value(self) -> i8 {
        match self {
            Polarity::Minus => -1,
            Polarity::Zero => 0,
            Polarity::Plus => 1,
        }
    }

    /// Inverse of [`value`](Self::value); `None` outside {-1, 0, 1}
    pub const fn from_value(v: i8) -> Option<Self> {
        match v {
            -1 => Some(Polarity::Minus),
            0 => Some(Polarity::Zero),
            1 => Some(Polarity::Plus),
            _ => None,
        }
    }

    /// All polarities have zero magnitude
    pub const fn magnitude(self) -> i8 {
        0
    }

    /// Separation primitive: Zero splits into both biased copies, any
    /// non-zero polarity separates into itself alone
    pub fn separate(self) -> Vec<Polarity> {
        match self {
            Polarity::Zero => vec![Polarity::Minus, Polarity::Plus],
            p => vec![p],
        }
    }

    /// Constant injection toward the positive orientation
    pub const fn plus_inject(self) -> Polarity {
        Polarity::Plus
    }

    /// Constant injection toward the negative orientation
    pub const fn minus_inject(self) -> Polarity {
        Polarity::Minus
    }

    /// Collapse a separated polarity back to a single orientation under
    /// the given bias
    pub const fn collapse(bias: Polarity) -> Polarity {
        bias
    }

    /// True iff this is the neutral orientation
    pub const fn is_zero(self) -> bool {
        matches!(self, Polarity::Zero)
    }
}

impl Neg for Polarity {
    type Output = Polarity;

    fn neg(self) -> Polarity {
        match self {
            Polarity::Minus => Polarity::Plus,
            Polarity::Zero => Polarity::Zero,
            Polarity::Plus => Polarity::Minus,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Polarity::Minus => "-0",
            Polarity::Zero => "0",
            Polarity::Plus => "+0",
        };
        write!(f, "{}", s)
    }
}

/// An ordered 3-tuple of polarities (axes x, y, z)
///
/// Immutable value type: every operator produces a new `Triple` rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple(pub [Polarity; 3]);

impl Triple {
    /// Construct from the three axes
    pub const fn new(x: Polarity, y: Polarity, z: Polarity) -> Self {
        Self([x, y, z])
    }

    /// The stillpoint (0, 0, 0)
    pub const fn zero() -> Self {
        Self([Polarity::Zero; 3])
    }

    /// X axis
    pub const fn x(self) -> Polarity {
        self.0[0]
    }

    /// Y axis
    pub const fn y(self) -> Polarity {
        self.0[1]
    }

    /// Z axis
    pub const fn z(self) -> Polarity {
        self.0[2]
    }

    /// Underlying integer values per axis
    pub const fn values(self) -> [i8; 3] {
        [self.0[0].value(), self.0[1].value(), self.0[2].value()]
    }

    /// True iff all three axes are neutral
    pub fn is_zero(self) -> bool {
        self.0.iter().all(|p| p.is_zero())
    }

    /// Elementwise L1 distance to another triple
    ///
    /// Bounded by 6: each axis differs by at most 2.
    pub fn l1_distance(self, other: Triple) -> u8 {
        let a = self.values();
        let b = other.values();
        (0..3).map(|i| (a[i] - b[i]).unsigned_abs()).sum()
    }

    /// Parse a literal like `+,0,-` or `1,0,-1`
    pub fn parse(s: &str) -> Result<Self, EncodeError> {
        let bad = || EncodeError::InvalidTriple(s.to_string());
        let mut axes = [Polarity::Zero; 3];
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        for (axis, part) in axes.iter_mut().zip(parts) {
            *axis = match part {
                "+" | "+0" | "1" | "+1" => Polarity::Plus,
                "-" | "-0" | "-1" => Polarity::Minus,
                "0" => Polarity::Zero,
                _ => return Err(bad()),
            };
        }
        Ok(Self(axes))
    }

    /// Enumerate the full 27-element triple space
    pub fn enumerate() -> impl Iterator<Item = Triple> {
        const P: [Polarity; 3] = [Polarity::Minus, Polarity::Zero, Polarity::Plus];
        P.into_iter().flat_map(|x| {
            P.into_iter()
                .flat_map(move |y| P.into_iter().map(move |z| Triple::new(x, y, z)))
        })
    }
}

impl From<[Polarity; 3]> for Triple {
    fn from(axes: [Polarity; 3]) -> Self {
        Self(axes)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
