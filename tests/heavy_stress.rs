#![cfg(feature = "heavy")]
use indexmap::IndexMap;
use rand::{rngs::StdRng, Rng, SeedableRng};
use stagecoach::{solve_config, Combine, EdgeMap, Objective, RouteConfig};

const STAGES: usize = 400;
const WIDTH: usize = 50;
const FANOUT: usize = 10;

fn random_instance(seed: u64) -> RouteConfig {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layers: Vec<Vec<String>> = vec![vec!["S".to_owned()]];
    for stage in 1..STAGES - 1 {
        layers.push((0..WIDTH).map(|j| format!("s{stage}n{j}")).collect());
    }
    layers.push(vec!["T".to_owned()]);

    let mut edges: EdgeMap = IndexMap::new();
    for pair in layers.windows(2) {
        let (from_layer, to_layer) = (&pair[0], &pair[1]);
        for from in from_layer {
            let mut neighbors: IndexMap<String, f64> = IndexMap::new();
            for _ in 0..FANOUT {
                let to = &to_layer[rng.gen_range(0..to_layer.len())];
                neighbors.insert(to.clone(), rng.gen_range(1..=9) as f64);
            }
            edges.insert(from.clone(), neighbors);
        }
    }

    RouteConfig {
        layers,
        edges,
        start: "S".to_owned(),
        goal: "T".to_owned(),
        opt_mode: Objective::Min,
        combine_op: Combine::Sum,
    }
}

#[test]
fn heavy_stress_deep_wide_instance() {
    let config = random_instance(7);
    let solution = solve_config(&config).unwrap();

    // Integer weights in 1..=9 over STAGES - 1 transitions bound the optimum.
    let transitions = (STAGES - 1) as f64;
    assert!(solution.optimal_cost >= transitions);
    assert!(solution.optimal_cost <= 9.0 * transitions);
    assert_eq!(solution.optimal_cost.fract(), 0.0);

    assert_eq!(solution.path.len(), STAGES);
    assert_eq!(solution.path.first().map(String::as_str), Some("S"));
    assert_eq!(solution.path.last().map(String::as_str), Some("T"));
    assert_eq!(solution.tables.len(), STAGES - 1);
}
