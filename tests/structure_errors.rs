use indexmap::IndexMap;
use stagecoach::{
    diagnose, solve_config, validate, Combine, EdgeMap, Objective, RouteConfig, SolveError,
    StructureError,
};

fn layers(spec: &[&[&str]]) -> Vec<Vec<String>> {
    spec.iter()
        .map(|stage| stage.iter().map(|s| (*s).to_owned()).collect())
        .collect()
}

fn edge_map(spec: &[(&str, &str, f64)]) -> EdgeMap {
    let mut edges: EdgeMap = IndexMap::new();
    for &(from, to, weight) in spec {
        edges
            .entry(from.to_owned())
            .or_insert_with(IndexMap::new)
            .insert(to.to_owned(), weight);
    }
    edges
}

fn config(
    layers_spec: &[&[&str]],
    edges_spec: &[(&str, &str, f64)],
    start: &str,
    goal: &str,
) -> RouteConfig {
    RouteConfig {
        layers: layers(layers_spec),
        edges: edge_map(edges_spec),
        start: start.to_owned(),
        goal: goal.to_owned(),
        opt_mode: Objective::Min,
        combine_op: Combine::Sum,
    }
}

#[test]
fn empty_layer_list_is_rejected() {
    let err = validate(&[], &IndexMap::new(), "S", "T").unwrap_err();
    assert_eq!(err, StructureError::NoStages);
}

#[test]
fn empty_stage_is_rejected_with_its_index() {
    let err = validate(&layers(&[&["S"], &[], &["T"]]), &IndexMap::new(), "S", "T").unwrap_err();
    assert_eq!(err, StructureError::EmptyStage { index: 1 });
}

#[test]
fn duplicate_node_is_rejected() {
    let err = validate(
        &layers(&[&["S"], &["X", "X"], &["T"]]),
        &IndexMap::new(),
        "S",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::DuplicateNode {
            node: "X".to_owned()
        }
    );
}

#[test]
fn unknown_start_and_goal_are_rejected() {
    let stage_spec: &[&[&str]] = &[&["S"], &["T"]];
    let err = validate(&layers(stage_spec), &IndexMap::new(), "Q", "T").unwrap_err();
    assert_eq!(
        err,
        StructureError::UnknownStart {
            node: "Q".to_owned()
        }
    );
    let err = validate(&layers(stage_spec), &IndexMap::new(), "S", "Q").unwrap_err();
    assert_eq!(
        err,
        StructureError::UnknownGoal {
            node: "Q".to_owned()
        }
    );
}

#[test]
fn misplaced_start_and_goal_are_rejected() {
    let err = validate(
        &layers(&[&["S"], &["A"], &["T"]]),
        &IndexMap::new(),
        "A",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::StartNotFirst {
            node: "A".to_owned(),
            stage: 1,
        }
    );
    let err = validate(
        &layers(&[&["S"], &["T"], &["Z"]]),
        &IndexMap::new(),
        "S",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::GoalNotLast {
            node: "T".to_owned(),
            stage: 1,
            last: 2,
        }
    );
}

#[test]
fn edges_with_unknown_endpoints_are_rejected() {
    let stage_spec: &[&[&str]] = &[&["S"], &["T"]];
    let err = validate(
        &layers(stage_spec),
        &edge_map(&[("Q", "T", 1.0)]),
        "S",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::UnknownEdgeSource {
            node: "Q".to_owned()
        }
    );
    let err = validate(
        &layers(stage_spec),
        &edge_map(&[("S", "Q", 1.0)]),
        "S",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::UnknownEdgeTarget {
            from: "S".to_owned(),
            to: "Q".to_owned(),
        }
    );
}

#[test]
fn edges_must_advance_exactly_one_stage() {
    // Skipping a stage.
    let err = validate(
        &layers(&[&["S"], &["A"], &["T"]]),
        &edge_map(&[("S", "T", 1.0)]),
        "S",
        "T",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::WrongStageStep {
            from: "S".to_owned(),
            to: "T".to_owned(),
            from_stage: 0,
            to_stage: 2,
        }
    );

    // Lateral edge inside the single stage.
    let err = validate(
        &layers(&[&["S", "X"]]),
        &edge_map(&[("S", "X", 1.0)]),
        "S",
        "X",
    )
    .unwrap_err();
    assert_eq!(
        err,
        StructureError::WrongStageStep {
            from: "S".to_owned(),
            to: "X".to_owned(),
            from_stage: 0,
            to_stage: 0,
        }
    );
}

#[test]
fn diagnose_collects_every_defect_in_sweep_order() {
    let stage_spec: &[&[&str]] = &[&["S"], &[], &["A", "A"]];
    let edges = edge_map(&[("S", "A", f64::INFINITY)]);
    let defects = diagnose(&layers(stage_spec), &edges, "S", "T");
    assert_eq!(
        defects,
        vec![
            StructureError::EmptyStage { index: 1 },
            StructureError::DuplicateNode {
                node: "A".to_owned()
            },
            StructureError::UnknownGoal {
                node: "T".to_owned()
            },
            StructureError::WrongStageStep {
                from: "S".to_owned(),
                to: "A".to_owned(),
                from_stage: 0,
                to_stage: 2,
            },
            StructureError::NonFiniteWeight {
                from: "S".to_owned(),
                to: "A".to_owned(),
                weight: f64::INFINITY,
            },
        ]
    );

    // validate stops at the first of those.
    let err = validate(&layers(stage_spec), &edges, "S", "T").unwrap_err();
    assert_eq!(err, StructureError::EmptyStage { index: 1 });
}

#[test]
fn diagnose_passes_a_sound_description() {
    let config = RouteConfig::example();
    assert!(diagnose(&config.layers, &config.edges, &config.start, &config.goal).is_empty());
}

#[test]
fn node_without_successors_dead_ends_the_solve() {
    let config = config(
        &[&["S"], &["A", "B"], &["T"]],
        &[("S", "A", 1.0), ("S", "B", 1.0), ("A", "T", 1.0)],
        "S",
        "T",
    );
    let err = solve_config(&config).unwrap_err();
    assert_eq!(
        err,
        SolveError::DeadEnd {
            node: "B".to_owned(),
            stage: 1,
        }
    );
    // Stage numbering in the message matches the printed tables.
    assert_eq!(
        err.to_string(),
        "no valid successor out of node 'B' in stage 2"
    );
}

#[test]
fn route_through_non_goal_terminal_has_no_path() {
    // A's only edge lands on U, a final-stage node that is not the goal. U's
    // stand-in value is infinite, so it still wins A's tie set, and the walk
    // stalls there.
    let config = config(
        &[&["S"], &["A"], &["T", "U"]],
        &[("S", "A", 1.0), ("A", "U", 1.0)],
        "S",
        "T",
    );
    let err = solve_config(&config).unwrap_err();
    assert_eq!(
        err,
        SolveError::NoPath {
            at: "U".to_owned(),
            goal: "T".to_owned(),
        }
    );
}

#[test]
fn distinct_start_and_goal_in_a_single_stage_has_no_path() {
    let config = config(&[&["S", "T"]], &[], "S", "T");
    let err = solve_config(&config).unwrap_err();
    assert_eq!(
        err,
        SolveError::NoPath {
            at: "S".to_owned(),
            goal: "T".to_owned(),
        }
    );
}

#[test]
fn zero_weight_product_toward_unreachable_node_dead_ends() {
    // 0 * inf is NaN, which neither improves nor ties, so A ends up with an
    // empty candidate set.
    let mut config = config(
        &[&["S"], &["A"], &["T", "U"]],
        &[("S", "A", 1.0), ("A", "U", 0.0)],
        "S",
        "T",
    );
    config.combine_op = Combine::Product;
    let err = solve_config(&config).unwrap_err();
    assert_eq!(
        err,
        SolveError::DeadEnd {
            node: "A".to_owned(),
            stage: 1,
        }
    );
}

#[test]
fn structural_defects_surface_through_solve_config() {
    let config = config(&[&["S"], &["T"]], &[("S", "Q", 1.0)], "S", "T");
    let err = solve_config(&config).unwrap_err();
    assert_eq!(
        err,
        SolveError::Structure(StructureError::UnknownEdgeTarget {
            from: "S".to_owned(),
            to: "Q".to_owned(),
        })
    );
}
