//! Error types for graph validation, configuration parsing, and solving.
//!
//! Every failure is reported through one of three enums. Variants carry the
//! offending node, edge, or stage so messages stay actionable without the
//! caller re-deriving context.

use thiserror::Error;

/// A structural defect in the layer/edge description.
///
/// Produced by [`validate`](crate::validate) (first defect, in check order)
/// and [`diagnose`](crate::diagnose) (all defects).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructureError {
    /// The layer list itself is empty.
    #[error("layers must contain at least one stage")]
    NoStages,

    /// A stage exists but holds no nodes.
    #[error("stage {index} is empty; every stage needs at least one node")]
    EmptyStage { index: usize },

    /// The same node identifier appears in two stages.
    #[error("node '{node}' appears in more than one stage")]
    DuplicateNode { node: String },

    #[error("start node '{node}' is not present in any stage")]
    UnknownStart { node: String },

    #[error("goal node '{node}' is not present in any stage")]
    UnknownGoal { node: String },

    #[error("start node '{node}' sits in stage {stage}, but must sit in stage 0")]
    StartNotFirst { node: String, stage: usize },

    #[error("goal node '{node}' sits in stage {stage}, but must sit in the final stage {last}")]
    GoalNotLast {
        node: String,
        stage: usize,
        last: usize,
    },

    /// An edge leaves a node that no stage declares.
    #[error("edge source '{node}' is not present in any stage")]
    UnknownEdgeSource { node: String },

    /// An edge points at a node that no stage declares.
    #[error("edge {from} -> {to}: target '{to}' is not present in any stage")]
    UnknownEdgeTarget { from: String, to: String },

    /// An edge that is backward, lateral, or skips a stage.
    #[error(
        "edge {from} -> {to} goes from stage {from_stage} to stage {to_stage}; \
         every edge must advance exactly one stage"
    )]
    WrongStageStep {
        from: String,
        to: String,
        from_stage: usize,
        to_stage: usize,
    },

    /// Only reported by [`diagnose`](crate::diagnose): a NaN or infinite
    /// weight, which would poison the aggregates.
    #[error("edge {from} -> {to} carries a non-finite weight ({weight})")]
    NonFiniteWeight { from: String, to: String, weight: f64 },
}

/// An unrecognized wire value for the optimization mode or combine operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown optimization mode '{0}'; expected \"min\" or \"max\"")]
    UnknownObjective(String),

    #[error("unknown combine operator '{0}'; expected \"+\" or \"*\"")]
    UnknownCombine(String),
}

/// Anything that can go wrong while solving a configured instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A node in a non-terminal stage has no edge into the next stage, so no
    /// value can be assigned to it. The stage is displayed with the same
    /// 1-based numbering the stage tables use.
    #[error("no valid successor out of node '{node}' in stage {}", .stage + 1)]
    DeadEnd { node: String, stage: usize },

    /// The representative walk stalled before reaching the goal. Happens when
    /// the only optimal continuations run through nodes the goal is
    /// unreachable from (their tie sets are seeded by infinities).
    #[error("route reconstruction stalled at node '{at}' before reaching goal '{goal}'")]
    NoPath { at: String, goal: String },
}
