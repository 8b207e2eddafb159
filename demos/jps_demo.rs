//! Run the jumpgrid search modes on a map file or a random map and print
//! the results to the terminal.

use std::io;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use jumpgrid_core::{Grid, MapSymbols};
use jumpgrid_demos::{
    DEFAULT_OBSTACLE_PERCENT, DemoArgs, MapSource, USAGE, random_grid, random_open_cell, render,
};
use jumpgrid_paths::{Engine, Mode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match DemoArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let seed = match args.source {
        MapSource::Random { seed: Some(seed), .. } => seed,
        _ => rand::rng().random(),
    };
    let mut rng = SmallRng::seed_from_u64(seed);

    let grid = match &args.source {
        MapSource::File(path) => {
            let text = std::fs::read_to_string(path)?;
            let grid = Grid::parse_with(&text, &MapSymbols::lenient('@'))?;
            log::info!("loaded {}x{} map from {}", grid.width(), grid.height(), path.display());
            grid
        }
        MapSource::Random { width, height, .. } => {
            log::info!("random {width}x{height} map, seed {seed}");
            random_grid(*width, *height, DEFAULT_OBSTACLE_PERCENT, &mut rng)
        }
    };

    let (Some(start), Some(goal)) = (
        args.from.or_else(|| random_open_cell(&grid, &mut rng)),
        args.to.or_else(|| random_open_cell(&grid, &mut rng)),
    ) else {
        log::error!("map has no open cells");
        std::process::exit(1);
    };

    let mut engine = Engine::new(grid);
    let scanned = Instant::now();
    let jump_points = engine.scan().jump_point_count();
    log::info!("scan: {jump_points} jump points in {:?}", scanned.elapsed());

    let modes = args.mode.map_or_else(|| Mode::ALL.to_vec(), |m| vec![m]);
    let mut stdout = io::stdout();
    for mode in modes {
        let started = Instant::now();
        let path = engine.find_path(start, goal, mode);
        let elapsed = started.elapsed();

        println!();
        match &path {
            Some(path) => println!(
                "{mode}: {start} -> {goal}: {} waypoints, {} steps, cost {:.3}, {} expanded, {elapsed:?}",
                path.len(),
                path.step_count(),
                path.cost(),
                engine.last_expanded()
            ),
            None => println!(
                "{mode}: {start} -> {goal}: no path, {} expanded, {elapsed:?}",
                engine.last_expanded()
            ),
        }
        render(&mut stdout, engine.grid(), path.as_ref(), start, goal)?;
    }
    Ok(())
}
