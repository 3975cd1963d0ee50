use log::{error, info};

use mandelbrot_png::{
    config::Config,
    error::Result,
    output::{self, Summary},
    render,
};

fn run() -> Result<()> {
    let config = Config::from_env()?;

    let grid = render::render(&config)?;
    output::save(&grid, &config.outfile)?;
    info!("saved {}", config.outfile.display());

    println!("{}", Summary::new(&config));
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("mandelbrot-png: {}", err);
        std::process::exit(1);
    }
}
