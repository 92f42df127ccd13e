//! Example: solve the classic four-stage instance and print the tables.
//!
//! Run with:
//! `cargo run --example minimal_route`

use stagecoach::utils::fmt_number;
use stagecoach::{all_optimal_paths, solve_config, RouteConfig};

fn main() {
    let config = RouteConfig::example();

    let solution = solve_config(&config).expect("the built-in example always solves");

    for table in &solution.tables {
        println!("{table}\n");
    }

    println!("optimal value : {}", fmt_number(solution.optimal_cost));
    println!("route         : {}", solution.path.join(" -> "));

    let routes = all_optimal_paths(&solution.policy, &config.start, &config.goal);
    println!("optimal routes: {}", routes.len());
    for route in &routes {
        println!("  {}", route.join(" -> "));
    }
}
