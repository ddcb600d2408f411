use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use ordered_float::NotNan;
use strum::{Display, EnumString};

use crate::GraphError;

/// Uniquely identify a vertex of the road graph (a city name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<NodeId> for String {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Road distance, in whole kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kilometers(u32);

impl Kilometers {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u32::MAX);

    pub const fn new(km: u32) -> Self {
        Self(km)
    }

    pub const fn km(&self) -> u32 {
        self.0
    }
}

impl Add for Kilometers {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

/// Average travel speed on a road, in km/h.
/// Always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(NotNan<f64>);

impl Speed {
    pub fn from_kmh(kmh: f64) -> Result<Self, GraphError> {
        match NotNan::new(kmh) {
            Ok(speed) if kmh.is_finite() && kmh > 0.0 => Ok(Self(speed)),
            _ => Err(GraphError::InvalidSpeed(kmh)),
        }
    }

    pub fn kmh(&self) -> f64 {
        self.0.into_inner()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

/// Travel time with a resolution of a tenth of a minute.
///
/// Values are stored as an integer number of tenths, therefore adding per-edge rounded times is
/// exact and equivalent to rounding the running total to one decimal after every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Minutes(u64);

impl Minutes {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    /// Time needed to drive the distance at the given speed: `distance * 60 / speed` minutes,
    /// rounded half up to one decimal.
    pub fn travel(distance: Kilometers, speed: Speed) -> Self {
        let tenths = f64::from(distance.km()) * 600.0 / speed.kmh();
        // non-negative, so rounding half away from zero is rounding half up
        Self(tenths.round() as u64)
    }

    pub const fn tenths(&self) -> u64 {
        self.0
    }

    pub fn minutes(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl Add for Minutes {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} min", self.0 / 10, self.0 % 10)
    }
}

/// Category of a road segment.
/// Highways are the only category that can be excluded from routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RoadCategory {
    /// Motorway (autoroute), usually the fastest way between two cities.
    Highway,
    /// Any other road.
    #[default]
    Road,
}

/// The cost a route minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Objective {
    /// Minimum cumulative distance.
    #[default]
    Distance,
    /// Minimum cumulative travel time.
    Time,
}
