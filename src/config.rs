//! Run configuration: optimization direction, combine operator, and the
//! JSON document that ties them to a graph description.
//!
//! The document round-trips through serde with fixed wire values (`"min"`,
//! `"max"`, `"+"`, `"*"`), so a file saved by one run can seed the next.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::graph::EdgeMap;

/// Which extreme of the path aggregate the solver hunts for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Objective {
    /// Minimize the aggregate (wire value `"min"`).
    #[default]
    Min,
    /// Maximize the aggregate (wire value `"max"`).
    Max,
}

impl Objective {
    /// The value candidate scans start from: `+inf` when minimizing, `-inf`
    /// when maximizing. Doubles as the stand-in aggregate for nodes the goal
    /// cannot be reached from.
    #[inline]
    pub fn seed(self) -> f64 {
        match self {
            Objective::Min => f64::INFINITY,
            Objective::Max => f64::NEG_INFINITY,
        }
    }

    /// Strict "candidate `a` beats incumbent `b`" under this objective.
    /// False for equal values and for any NaN operand.
    #[inline]
    pub fn improves(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Min => a < b,
            Objective::Max => a > b,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Min => "min",
            Objective::Max => "max",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Objective::Min),
            "max" => Ok(Objective::Max),
            other => Err(ConfigError::UnknownObjective(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Objective {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Objective> for String {
    fn from(value: Objective) -> Self {
        value.as_str().to_owned()
    }
}

/// How an edge weight combines with the downstream aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Combine {
    /// Add the weight (wire value `"+"`). Identity 0.
    #[default]
    Sum,
    /// Multiply by the weight (wire value `"*"`). Identity 1.
    Product,
}

impl Combine {
    /// The aggregate assigned to the goal itself: the operator's identity.
    #[inline]
    pub fn identity(self) -> f64 {
        match self {
            Combine::Sum => 0.0,
            Combine::Product => 1.0,
        }
    }

    /// Fold one edge weight into the aggregate beyond it.
    #[inline]
    pub fn apply(self, weight: f64, downstream: f64) -> f64 {
        match self {
            Combine::Sum => weight + downstream,
            Combine::Product => weight * downstream,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Combine::Sum => "+",
            Combine::Product => "*",
        }
    }
}

impl fmt::Display for Combine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Combine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Combine::Sum),
            "*" => Ok(Combine::Product),
            other => Err(ConfigError::UnknownCombine(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Combine {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Combine> for String {
    fn from(value: Combine) -> Self {
        value.as_str().to_owned()
    }
}

/// One complete solve request: the layered graph plus the two mode knobs.
///
/// `opt_mode` and `combine_op` default to `min`/`+` when the document omits
/// them. Edge maps keep their JSON object order, which is what drives
/// candidate discovery order and therefore tie ordering downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub layers: Vec<Vec<String>>,
    pub edges: EdgeMap,
    pub start: String,
    pub goal: String,
    #[serde(default)]
    pub opt_mode: Objective,
    #[serde(default)]
    pub combine_op: Combine,
}

impl RouteConfig {
    /// Parse a configuration document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize the document as indented JSON, suitable for saving and
    /// re-loading.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The classic four-stage example instance (minimize sums). Optimal
    /// aggregate 5 along `S -> A -> D -> T`.
    pub fn example() -> Self {
        let layers = vec![
            vec!["S".to_owned()],
            vec!["A".to_owned(), "B".to_owned()],
            vec!["C".to_owned(), "D".to_owned()],
            vec!["T".to_owned()],
        ];
        let mut edges: EdgeMap = IndexMap::new();
        edges.insert(
            "S".to_owned(),
            IndexMap::from_iter([("A".to_owned(), 2.0), ("B".to_owned(), 5.0)]),
        );
        edges.insert(
            "A".to_owned(),
            IndexMap::from_iter([("C".to_owned(), 4.0), ("D".to_owned(), 1.0)]),
        );
        edges.insert(
            "B".to_owned(),
            IndexMap::from_iter([("C".to_owned(), 2.0)]),
        );
        edges.insert(
            "C".to_owned(),
            IndexMap::from_iter([("T".to_owned(), 3.0)]),
        );
        edges.insert(
            "D".to_owned(),
            IndexMap::from_iter([("T".to_owned(), 2.0)]),
        );
        RouteConfig {
            layers,
            edges,
            start: "S".to_owned(),
            goal: "T".to_owned(),
            opt_mode: Objective::Min,
            combine_op: Combine::Sum,
        }
    }
}
