//! Render configuration.
//!
//! [`Config::default`] renders the whole set at 1024x1024. A few other regions
//! worth looking at are available as [`Preset`]s, and the preset and worker
//! count can be overridden from the environment (see [`Config::from_env`]).

use std::{env, path::PathBuf, str::FromStr};

use log::debug;

use crate::{
    error::{Error, Result},
    screen,
    viewport::Viewport,
};

pub const PRESET_ENV: &str = "MANDELBROT_PRESET";
pub const THREADS_ENV: &str = "MANDELBROT_THREADS";

pub const DEFAULT_SIZE: screen::Size = screen::Size::new(1024, 1024);
pub const DEFAULT_MAXITERS: u32 = 1000;
pub const DEFAULT_OUTFILE: &str = "mandlebrot-generated.png";

/// Named regions of the complex plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// The whole set: `[-2, 1] × [-1, 1]`.
    Classic,
    /// Ten times further out, the set is a small blob in the middle.
    Wide,
    /// Close-up of the needle around `-1.48` on the real axis.
    Needle,
    /// Wider view of the same spike.
    Spike,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Classic, Preset::Wide, Preset::Needle, Preset::Spike];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Wide => "wide",
            Preset::Needle => "needle",
            Preset::Spike => "spike",
        }
    }

    /// `(xmin, xmax, ymin, ymax)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Preset::Classic => (-2.0, 1.0, -1.0, 1.0),
            Preset::Wide => (-20.0, 10.0, -10.0, 10.0),
            Preset::Needle => (-1.502929, -1.456054, -0.023437, 0.023437),
            Preset::Spike => (-1.5, -1.4, -0.10, 0.10),
        }
    }

    pub fn viewport(&self, size: screen::Size) -> Result<Viewport> {
        let (xmin, xmax, ymin, ymax) = self.bounds();
        Viewport::new(xmin, xmax, ymin, ymax, size)
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
                Error::Config(format!(
                    "unknown preset {:?}, expected one of {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Everything a single render needs. Passed by reference into the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub viewport: Viewport,
    /// The loop runs `maxiters + 1` times before a point counts as bounded.
    pub maxiters: u32,
    pub outfile: PathBuf,
    /// Rendering threads. `1` renders on the calling thread.
    pub threads: usize,
}

impl Config {
    pub fn new(viewport: Viewport, maxiters: u32) -> Self {
        Self {
            viewport,
            maxiters,
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            threads: num_cpus::get(),
        }
    }

    pub fn from_preset(preset: Preset) -> Result<Self> {
        Ok(Self::new(preset.viewport(DEFAULT_SIZE)?, DEFAULT_MAXITERS))
    }

    pub fn with_outfile(mut self, outfile: impl Into<PathBuf>) -> Self {
        self.outfile = outfile.into();
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// The default configuration with `MANDELBROT_PRESET` and
    /// `MANDELBROT_THREADS` applied when they are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(PRESET_ENV) {
            Some(name) => {
                let preset: Preset = name.parse()?;
                debug!("using preset {}", preset.name());
                Self::from_preset(preset)?
            }
            None => Self::default(),
        };

        if let Some(threads) = lookup(THREADS_ENV) {
            config.threads = threads.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be a positive integer, got {:?}",
                    THREADS_ENV, threads
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.maxiters == 0 {
            return Err(Error::Config("maxiters must be positive".to_string()));
        }
        if self.threads == 0 {
            return Err(Error::Config("threads must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let (xmin, xmax, ymin, ymax) = Preset::Classic.bounds();
        Self::new(
            Viewport::new(xmin, xmax, ymin, ymax, DEFAULT_SIZE)
                .unwrap_or_else(|err| unreachable!("classic viewport is valid: {}", err)),
            DEFAULT_MAXITERS,
        )
    }
}
