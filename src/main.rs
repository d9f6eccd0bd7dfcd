use log::info;
use tiled_fractal_explorer::{
    CliTourController, DEFAULT_TOUR, ExplorerConfig, GenerationStrategy, PpmFilePresenter,
};

const OUTPUT_PATH: &str = "output/explorer.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ExplorerConfig {
        max_tiles_per_frame: 16,
        generation: GenerationStrategy::Parallel,
        ..ExplorerConfig::default()
    };

    info!(
        "exploring {}x{} with up to {} tiles per frame",
        config.viewport.width, config.viewport.height, config.max_tiles_per_frame
    );

    let mut tour = CliTourController::new(PpmFilePresenter::new(), &config)?;
    tour.run(DEFAULT_TOUR)?;
    tour.write(OUTPUT_PATH)?;

    Ok(())
}
