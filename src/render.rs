//! Grid rendering.

use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    colour,
    config::Config,
    error::Result,
    escape,
    pixel::{Grid, Rgba},
    viewport::Viewport,
};

/// Colour of the single pixel `(i, j)`.
pub fn render_pixel(viewport: &Viewport, maxiters: u32, i: u32, j: u32) -> Rgba {
    let c = viewport.point(i, j);
    let escape = escape::classify(c, maxiters);
    trace!("pixel {},{} c={} {:?}", i, j, c, escape);
    colour::colour(escape)
}

fn render_row(viewport: &Viewport, maxiters: u32, j: u32, row: &mut [Rgba]) {
    for (i, pixel) in (0..).zip(row.iter_mut()) {
        *pixel = render_pixel(viewport, maxiters, i, j);
    }
}

/// Renders the whole viewport on the calling thread.
pub fn render_sequential(viewport: &Viewport, maxiters: u32) -> Grid {
    let mut grid = Grid::new(viewport.size());
    let width = viewport.size().width as usize;
    for (j, row) in (0..).zip(grid.pixels_mut().chunks_exact_mut(width)) {
        render_row(viewport, maxiters, j, row);
    }
    grid
}

/// Renders the whole viewport with rows spread over the current rayon pool.
///
/// Every row is written by exactly one task, so the result is identical to
/// [`render_sequential`].
pub fn render_parallel(viewport: &Viewport, maxiters: u32) -> Grid {
    let mut grid = Grid::new(viewport.size());
    let width = viewport.size().width as usize;
    grid.pixels_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(j, row)| render_row(viewport, maxiters, j as u32, row));
    grid
}

/// Renders `config.viewport` using `config.threads` threads.
pub fn render(config: &Config) -> Result<Grid> {
    config.validate()?;

    debug!(
        "rendering {} with maxiters={} on {} thread(s)",
        config.viewport.size(),
        config.maxiters,
        config.threads
    );
    let start = Instant::now();

    let grid = if config.threads == 1 {
        render_sequential(&config.viewport, config.maxiters)
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| render_parallel(&config.viewport, config.maxiters))
    };

    debug!("rendered in {:?}", start.elapsed());
    Ok(grid)
}
