use std::fs;

use lifeplan::config::PlanConfig;
use lifeplan::report;
use lifeplan::simulation::Simulation;
use lifeplan::types::Year;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<String> = None;
    let mut end_year_override: Option<i32> = None;
    let mut detail_override: Option<i32> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--end-year" => {
                i += 1;
                end_year_override =
                    Some(args[i].parse().expect("--end-year requires a year"));
            }
            "--detail" => {
                i += 1;
                detail_override = Some(args[i].parse().expect("--detail requires a year"));
            }
            "--quiet" => quiet = true,
            _ => {}
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
            PlanConfig::from_json(&json)
                .unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
        }
        None => PlanConfig::canonical(),
    };
    if let Some(y) = end_year_override {
        config.end_year = Year(y);
    }
    if let Some(y) = detail_override {
        config.detail_year = Year(y);
    }

    let detail_year = config.detail_year;
    let base_year = config.base_year;

    let mut sim = Simulation::from_config(config);
    let outcome = sim.run();

    print!("{}", report::render(&sim.records, &outcome, detail_year, base_year, quiet));

    if !outcome.success {
        std::process::exit(1);
    }
}
