use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use stagecoach::utils::fmt_number;
use stagecoach::{all_optimal_paths, render_svg, solve, RouteConfig, StageGraph};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("solve_route: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("solve_route: {err}");
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&options.config_path)?;
    let config = RouteConfig::from_json(&text)?;
    let graph = StageGraph::from_config(&config)?;

    let started = Instant::now();
    let solution = solve(&graph, config.opt_mode, config.combine_op)?;
    let elapsed = started.elapsed();

    for table in &solution.tables {
        println!("{table}\n");
    }
    println!("mode          : {} (op={})", config.opt_mode, config.combine_op);
    println!("optimal value : {}", fmt_number(solution.optimal_cost));
    println!("route         : {}", solution.path.join(" -> "));

    if options.all_routes || options.svg_path.is_some() {
        let routes = all_optimal_paths(&solution.policy, &config.start, &config.goal);
        if options.all_routes {
            println!("optimal routes: {}", routes.len());
            for route in &routes {
                println!("  {}", route.join(" -> "));
            }
        }
        if let Some(svg_path) = &options.svg_path {
            let file = fs::File::create(svg_path)?;
            let mut writer = io::BufWriter::new(file);
            render_svg(&graph, &routes, &mut writer)?;
            eprintln!("diagram written to {}", svg_path.display());
        }
    }

    eprintln!(
        "solved {} nodes / {} edges in {:.3}s",
        graph.node_count(),
        graph.edge_count(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

struct Options {
    config_path: PathBuf,
    svg_path: Option<PathBuf>,
    all_routes: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut config_path: Option<PathBuf> = None;
        let mut svg_path: Option<PathBuf> = None;
        let mut all_routes = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--svg=") {
                svg_path = Some(PathBuf::from(value));
            } else if arg == "--svg" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --svg".to_string())?
                    .into();
                svg_path = Some(PathBuf::from(value));
            } else if arg == "--all-routes" {
                all_routes = true;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else if config_path.is_none() {
                config_path = Some(PathBuf::from(arg));
            } else {
                return Err(format!("unexpected extra argument '{arg}'"));
            }
        }

        let config_path = config_path
            .ok_or_else(|| "missing path to a configuration JSON file".to_string())?;
        Ok(Self {
            config_path,
            svg_path,
            all_routes,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin solve_route -- <config.json> [options]

Reads a route configuration document, solves it, and prints the per-stage
decision tables plus the optimal route.

Options:
  --svg <PATH>     Write an SVG diagram with every optimal route highlighted
  --all-routes     Also list every optimal route, not just the representative
  -h, --help       Print this help message

Examples:
  cargo run --bin solve_route -- route.json
  cargo run --bin solve_route -- route.json --all-routes --svg route.svg
"
        );
    }
}
