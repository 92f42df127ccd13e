//! Example: render the classic instance as an SVG with every optimal route
//! highlighted.
//!
//! Run with:
//! `cargo run --example draw_route`
//!
//! Writes `route.svg` into the current directory.

use std::fs::File;
use std::io::BufWriter;

use stagecoach::{all_optimal_paths, render_svg, solve, RouteConfig, StageGraph};

fn main() {
    let config = RouteConfig::example();
    let graph = StageGraph::from_config(&config).expect("the built-in example is valid");

    let solution =
        solve(&graph, config.opt_mode, config.combine_op).expect("the built-in example solves");
    let routes = all_optimal_paths(&solution.policy, &config.start, &config.goal);

    let file = File::create("route.svg").expect("cannot create route.svg");
    let mut writer = BufWriter::new(file);
    render_svg(&graph, &routes, &mut writer).expect("rendering failed");

    println!(
        "wrote route.svg ({} optimal route{} highlighted)",
        routes.len(),
        if routes.len() == 1 { "" } else { "s" }
    );
}
