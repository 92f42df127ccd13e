//! Exhaustive enumeration of optimal routes.

use crate::policy::Policy;

/// All optimal routes from `start` to `goal`, depth first over the policy.
///
/// Route order is deterministic: successors are explored in their tie-set
/// order, so the first route returned is the representative one. Recursion
/// depth is bounded by the stage count because every policy successor is one
/// stage forward. The number of routes can grow exponentially with heavily
/// tied instances; callers that only need one route should use the
/// representative path on the solution instead.
///
/// A `start` with no policy entry yields no routes; `start == goal` yields
/// the single one-node route.
pub fn all_optimal_paths(policy: &Policy, start: &str, goal: &str) -> Vec<Vec<String>> {
    let mut found = Vec::new();
    let mut trail = vec![start.to_owned()];
    dfs(policy, start, goal, &mut trail, &mut found);
    found
}

fn dfs(
    policy: &Policy,
    node: &str,
    goal: &str,
    trail: &mut Vec<String>,
    found: &mut Vec<Vec<String>>,
) {
    if node == goal {
        found.push(trail.clone());
        return;
    }
    if let Some(successors) = policy.successors(node) {
        for next in successors {
            trail.push(next.clone());
            dfs(policy, next, goal, trail, found);
            trail.pop();
        }
    }
}
