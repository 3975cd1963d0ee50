//! PNG output and the post-render summary.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use log::debug;

use crate::{
    config::Config,
    error::{Error, Result},
    pixel::Grid,
};

/// Encodes `grid` as an RGBA8 PNG into `writer`.
pub fn encode_png<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        grid.as_bytes(),
        grid.width(),
        grid.height(),
        ColorType::Rgba8,
    )?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `grid` to it as a PNG.
pub fn save(grid: &Grid, path: &Path) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    encode_png(grid, &mut writer)?;
    writer.flush().map_err(io_error)?;

    debug!("wrote {} to {}", grid.size(), path.display());
    Ok(())
}

/// What was rendered and where it went.
pub struct Summary<'a> {
    config: &'a Config,
}

impl<'a> Summary<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl<'a> fmt::Display for Summary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let viewport = &self.config.viewport;
        writeln!(
            f,
            "Generated Mandelbrot set image and saved file to {}",
            self.config.outfile.display()
        )?;
        writeln!(f, "\tReal axis starts at      : {}", viewport.xmin())?;
        writeln!(f, "\tReal axis ends at        : {}", viewport.xmax())?;
        writeln!(f, "\tImaginary axis starts at : {}", viewport.ymin())?;
        writeln!(f, "\tImaginary axis ends at   : {}", viewport.ymax())?;
        writeln!(f, "\tIterations               : {}", self.config.maxiters)?;
        write!(f, "\tResolution               : {}", viewport.size())
    }
}
