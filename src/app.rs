use std::fs;

use log::info;

use crate::{pattern, Config, Error, Result, Sim, World};

/// loads the configured pattern, runs it and renders the last generation.
pub fn run(config: &Config) -> Result<String> {
    let content = fs::read_to_string(&config.path).map_err(|source| Error::Io {
        path: config.path.clone(),
        source,
    })?;
    let world = pattern::parse(&content)?;
    info!(
        "loaded {}x{} world with {} alive from {}",
        world.width(),
        world.height(),
        world.population(),
        config.path.display()
    );

    let mut simulation = Sim::new(world);
    simulation.run(config.generations)?;
    info!(
        "stopped at generation {} with {} alive",
        simulation.generation(),
        simulation.world().population()
    );

    Ok(pattern::render(simulation.world()))
}
