//! Stage-layered graph structure and its validation.
//!
//! A [`StageGraph`] can only be constructed through [`validate`], so holding
//! one is proof that the layer/edge description is structurally sound: stages
//! are non-empty, every node lives in exactly one stage, start and goal sit on
//! the boundary stages, and every edge advances exactly one stage.

use indexmap::IndexMap;

use crate::config::RouteConfig;
use crate::error::StructureError;

/// Edge weights: source node -> destination node -> weight.
/// Insertion order follows the configuration document.
pub type EdgeMap = IndexMap<String, IndexMap<String, f64>>;

/// Node -> stage index, in flattened layer order.
pub type StageMap = IndexMap<String, usize>;

/// Run the structural checks and derive the node -> stage mapping.
///
/// Checks run in a fixed order and stop at the first defect:
/// 1. at least one stage, and no stage is empty;
/// 2. no node appears in two stages;
/// 3. start and goal resolve to stages;
/// 4. start sits in stage 0, goal in the last stage;
/// 5. every edge endpoint resolves, and the destination stage is the source
///    stage plus one.
///
/// Use [`diagnose`] instead to collect every defect at once.
pub fn validate(
    layers: &[Vec<String>],
    edges: &EdgeMap,
    start: &str,
    goal: &str,
) -> Result<StageMap, StructureError> {
    if layers.is_empty() {
        return Err(StructureError::NoStages);
    }
    for (index, stage) in layers.iter().enumerate() {
        if stage.is_empty() {
            return Err(StructureError::EmptyStage { index });
        }
    }

    let mut stage_of: StageMap = IndexMap::new();
    for (index, stage) in layers.iter().enumerate() {
        for node in stage {
            if stage_of.insert(node.clone(), index).is_some() {
                return Err(StructureError::DuplicateNode { node: node.clone() });
            }
        }
    }

    let start_stage = match stage_of.get(start) {
        Some(&stage) => stage,
        None => {
            return Err(StructureError::UnknownStart {
                node: start.to_owned(),
            })
        }
    };
    let goal_stage = match stage_of.get(goal) {
        Some(&stage) => stage,
        None => {
            return Err(StructureError::UnknownGoal {
                node: goal.to_owned(),
            })
        }
    };
    if start_stage != 0 {
        return Err(StructureError::StartNotFirst {
            node: start.to_owned(),
            stage: start_stage,
        });
    }
    let last = layers.len() - 1;
    if goal_stage != last {
        return Err(StructureError::GoalNotLast {
            node: goal.to_owned(),
            stage: goal_stage,
            last,
        });
    }

    for (from, neighbors) in edges {
        let from_stage = match stage_of.get(from) {
            Some(&stage) => stage,
            None => {
                return Err(StructureError::UnknownEdgeSource { node: from.clone() });
            }
        };
        for to in neighbors.keys() {
            let to_stage = match stage_of.get(to) {
                Some(&stage) => stage,
                None => {
                    return Err(StructureError::UnknownEdgeTarget {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            };
            if to_stage != from_stage + 1 {
                return Err(StructureError::WrongStageStep {
                    from: from.clone(),
                    to: to.clone(),
                    from_stage,
                    to_stage,
                });
            }
        }
    }

    Ok(stage_of)
}

/// Sweep the whole description and report every defect, not just the first.
///
/// Meant for front-ends that show the user a complete problem list. On top of
/// the [`validate`] checks this also flags non-finite edge weights, the one
/// weight property the type system does not already rule out. Duplicated
/// nodes keep their first stage for the purposes of later checks.
pub fn diagnose(
    layers: &[Vec<String>],
    edges: &EdgeMap,
    start: &str,
    goal: &str,
) -> Vec<StructureError> {
    let mut defects = Vec::new();

    if layers.is_empty() {
        defects.push(StructureError::NoStages);
    }
    for (index, stage) in layers.iter().enumerate() {
        if stage.is_empty() {
            defects.push(StructureError::EmptyStage { index });
        }
    }

    let mut stage_of: StageMap = IndexMap::new();
    for (index, stage) in layers.iter().enumerate() {
        for node in stage {
            if stage_of.contains_key(node) {
                defects.push(StructureError::DuplicateNode { node: node.clone() });
            } else {
                stage_of.insert(node.clone(), index);
            }
        }
    }

    match stage_of.get(start) {
        Some(&stage) if stage != 0 => defects.push(StructureError::StartNotFirst {
            node: start.to_owned(),
            stage,
        }),
        Some(_) => {}
        None => defects.push(StructureError::UnknownStart {
            node: start.to_owned(),
        }),
    }
    if !layers.is_empty() {
        let last = layers.len() - 1;
        match stage_of.get(goal) {
            Some(&stage) if stage != last => defects.push(StructureError::GoalNotLast {
                node: goal.to_owned(),
                stage,
                last,
            }),
            Some(_) => {}
            None => defects.push(StructureError::UnknownGoal {
                node: goal.to_owned(),
            }),
        }
    } else if stage_of.get(goal).is_none() {
        defects.push(StructureError::UnknownGoal {
            node: goal.to_owned(),
        });
    }

    for (from, neighbors) in edges {
        let from_stage = stage_of.get(from).copied();
        if from_stage.is_none() {
            defects.push(StructureError::UnknownEdgeSource { node: from.clone() });
        }
        for (to, &weight) in neighbors {
            match (stage_of.get(to).copied(), from_stage) {
                (None, _) => defects.push(StructureError::UnknownEdgeTarget {
                    from: from.clone(),
                    to: to.clone(),
                }),
                (Some(to_stage), Some(source_stage)) if to_stage != source_stage + 1 => {
                    defects.push(StructureError::WrongStageStep {
                        from: from.clone(),
                        to: to.clone(),
                        from_stage: source_stage,
                        to_stage,
                    });
                }
                _ => {}
            }
            if !weight.is_finite() {
                defects.push(StructureError::NonFiniteWeight {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                });
            }
        }
    }

    defects
}

/// A validated stage-layered graph.
#[derive(Debug, Clone)]
pub struct StageGraph {
    layers: Vec<Vec<String>>,
    edges: EdgeMap,
    start: String,
    goal: String,
    stage_of: StageMap,
}

impl StageGraph {
    /// Validate the description and capture the derived stage mapping.
    pub fn new(
        layers: Vec<Vec<String>>,
        edges: EdgeMap,
        start: impl Into<String>,
        goal: impl Into<String>,
    ) -> Result<Self, StructureError> {
        let start = start.into();
        let goal = goal.into();
        let stage_of = validate(&layers, &edges, &start, &goal)?;
        Ok(Self {
            layers,
            edges,
            start,
            goal,
            stage_of,
        })
    }

    /// Build the graph part of a configuration document.
    pub fn from_config(config: &RouteConfig) -> Result<Self, StructureError> {
        Self::new(
            config.layers.clone(),
            config.edges.clone(),
            config.start.clone(),
            config.goal.clone(),
        )
    }

    pub fn layers(&self) -> &[Vec<String>] {
        &self.layers
    }

    pub fn edges(&self) -> &EdgeMap {
        &self.edges
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn num_stages(&self) -> usize {
        self.layers.len()
    }

    /// Number of stage transitions. One less than the stage count; validation
    /// guarantees at least one stage.
    pub fn transitions(&self) -> usize {
        self.layers.len() - 1
    }

    /// Stage index of a node, if the node exists.
    pub fn stage_of(&self, node: &str) -> Option<usize> {
        self.stage_of.get(node).copied()
    }

    /// The full node -> stage mapping, in flattened layer order.
    pub fn stage_map(&self) -> &StageMap {
        &self.stage_of
    }

    /// All nodes in flattened stage order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.stage_of.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.stage_of.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    /// Weight of the edge `from -> to`, if such an edge exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }
}
