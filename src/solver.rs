//! Backward-induction solver.
//!
//! Stages are processed from the last transition down to the first. Each node
//! is assigned the optimal aggregate over its next-stage candidates and the
//! ordered set of successors tying at that optimum. The walk that extracts a
//! representative route and the per-stage tables both fall out of that pass.

use indexmap::{IndexMap, IndexSet};

use crate::config::{Combine, Objective, RouteConfig};
use crate::error::SolveError;
use crate::graph::StageGraph;
use crate::policy::Policy;
use crate::report::{StageReport, StageRow};

/// Everything one solve produces. Assembled once, then read-only.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Optimal aggregate from start to goal.
    pub optimal_cost: f64,
    /// One optimal route, following the first tied successor at each node.
    pub path: Vec<String>,
    /// Per-transition decision tables, stage 1 first.
    pub tables: Vec<StageReport>,
    /// Optimal aggregate per node, goal first, then in backward assignment
    /// order.
    pub f_star: IndexMap<String, f64>,
    /// All tied optimal successors per node.
    pub policy: Policy,
}

/// Run the backward induction over a validated graph.
///
/// ```
/// use stagecoach::{solve, Combine, Objective, RouteConfig, StageGraph};
///
/// let graph = StageGraph::from_config(&RouteConfig::example()).unwrap();
/// let solution = solve(&graph, Objective::Min, Combine::Sum).unwrap();
/// assert_eq!(solution.optimal_cost, 5.0);
/// assert_eq!(solution.path, ["S", "A", "D", "T"]);
/// ```
///
/// # Errors
/// [`SolveError::DeadEnd`] when a node in a non-terminal stage has no edge
/// into the next stage; [`SolveError::NoPath`] when the representative walk
/// stalls before the goal (possible when the only tied continuations run
/// through nodes the goal is unreachable from).
pub fn solve(
    graph: &StageGraph,
    objective: Objective,
    combine: Combine,
) -> Result<Solution, SolveError> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!(
        "solve",
        stages = graph.num_stages(),
        nodes = graph.node_count(),
        %objective,
        %combine
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let transitions = graph.transitions();
    let seed = objective.seed();

    let mut f_star: IndexMap<String, f64> = IndexMap::new();
    f_star.insert(graph.goal().to_owned(), combine.identity());
    let mut policy = Policy::new();
    policy.record(graph.goal(), IndexSet::new());

    // Backward pass over transitions K-1 .. 0.
    let mut tables = Vec::with_capacity(transitions);
    for t in (0..transitions).rev() {
        let current = &graph.layers()[t];
        let next_layer = &graph.layers()[t + 1];
        let mut rows = Vec::with_capacity(current.len());

        for node in current {
            let mut candidates = Vec::with_capacity(next_layer.len());
            let mut best = seed;
            let mut tied: IndexSet<String> = IndexSet::new();

            for target in next_layer {
                let weight = match graph.weight(node, target) {
                    Some(weight) => weight,
                    None => {
                        candidates.push(None);
                        continue;
                    }
                };
                // A final-stage node other than the goal has no assigned
                // value; the seed stands in for it.
                let downstream = f_star.get(target).copied().unwrap_or(seed);
                let total = combine.apply(weight, downstream);
                candidates.push(Some(total));

                if objective.improves(total, best) {
                    best = total;
                    tied.clear();
                    tied.insert(target.clone());
                } else if total == best {
                    tied.insert(target.clone());
                }
            }

            if tied.is_empty() {
                return Err(SolveError::DeadEnd {
                    node: node.clone(),
                    stage: t,
                });
            }

            f_star.insert(node.clone(), best);
            rows.push(StageRow {
                node: node.clone(),
                candidates,
                best,
                chosen: tied.iter().cloned().collect(),
            });
            policy.record(node.clone(), tied);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(stage = t + 1, nodes = current.len(), "stage relaxed");

        tables.push(StageReport {
            stage: t + 1,
            objective,
            combine,
            targets: next_layer.clone(),
            rows,
        });
    }

    // Collected in processing order; expose stage 1 first.
    tables.reverse();

    let path = representative_path(&policy, graph.start(), graph.goal())?;
    let optimal_cost = f_star
        .get(graph.start())
        .copied()
        .unwrap_or_else(|| combine.identity());

    Ok(Solution {
        optimal_cost,
        path,
        tables,
        f_star,
        policy,
    })
}

/// Validate and solve a configuration document in one call.
///
/// # Errors
/// Structural defects surface as [`SolveError::Structure`]; the solve itself
/// can fail as described on [`solve`].
pub fn solve_config(config: &RouteConfig) -> Result<Solution, SolveError> {
    let graph = StageGraph::from_config(config)?;
    solve(&graph, config.opt_mode, config.combine_op)
}

/// Walk from start to goal taking the first tied successor at every node.
fn representative_path(policy: &Policy, start: &str, goal: &str) -> Result<Vec<String>, SolveError> {
    let mut path = vec![start.to_owned()];
    let mut current = start.to_owned();
    while current != goal {
        let next = match policy.first_choice(&current) {
            Some(next) => next.to_owned(),
            None => {
                return Err(SolveError::NoPath {
                    at: current,
                    goal: goal.to_owned(),
                });
            }
        };
        path.push(next.clone());
        current = next;
    }
    Ok(path)
}
