//! Stagecoach dynamic programming
//!
//! This crate solves the classic stagecoach problem: find an optimal route
//! through a directed acyclic graph arranged in ordered stages, where every
//! edge crosses from one stage to the next and edge weights aggregate by sum
//! or by product along the route. Both minimization and maximization are
//! supported.
//!
//! ## Core idea
//! 1. Describe the instance as layers of node names plus a weighted edge map
//!    (or load a [`RouteConfig`] JSON document).
//! 2. [`validate`] the structure; a [`StageGraph`] witnesses the result.
//! 3. [`solve`] runs one backward pass, assigning every node its optimal
//!    aggregate f\* and *all* successors tying at that optimum.
//! 4. Read the answer off the [`Solution`]: cost, a representative route,
//!    per-stage decision tables, and the full value function and policy.
//!    [`all_optimal_paths`] enumerates every optimal route and [`render_svg`]
//!    draws the graph with routes highlighted.
//!
//! The tie-preserving policy is the point: when several successors achieve
//! the same optimum they are all kept, in discovery order, so downstream
//! consumers can show every optimal route instead of an arbitrary one.
//!
//! ## Quick start
//! ```
//! use stagecoach::{all_optimal_paths, solve_config, RouteConfig};
//!
//! let config = RouteConfig::example();
//! let solution = solve_config(&config).unwrap();
//! assert_eq!(solution.optimal_cost, 5.0);
//! assert_eq!(solution.path, ["S", "A", "D", "T"]);
//!
//! let routes = all_optimal_paths(&solution.policy, &config.start, &config.goal);
//! assert_eq!(routes.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod paths;
pub mod policy;
pub mod render;
pub mod report;
pub mod solver;
pub mod utils;

pub use crate::config::{Combine, Objective, RouteConfig};
pub use crate::error::{ConfigError, SolveError, StructureError};
pub use crate::graph::{diagnose, validate, EdgeMap, StageGraph, StageMap};
pub use crate::paths::all_optimal_paths;
pub use crate::policy::Policy;
pub use crate::render::{render_svg, render_svg_with, RenderOptions, HIGHLIGHT_PALETTE};
pub use crate::report::{StageReport, StageRow};
pub use crate::solver::{solve, solve_config, Solution};
