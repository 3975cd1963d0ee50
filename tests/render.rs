use mandelbrot_png::{
    colour,
    config::{Config, Preset},
    escape::{self, Escape},
    output,
    pixel::{Grid, Rgba},
    render, screen,
    viewport::Viewport,
};
use num_complex::Complex64;

const K: Rgba = Rgba::OPAQUE_BLACK;

const fn r(v: u8) -> Rgba {
    Rgba::opaque(v, 0, 0)
}

const fn g(v: u8) -> Rgba {
    Rgba::opaque(0, v, 0)
}

const fn b(v: u8) -> Rgba {
    Rgba::opaque(0, 0, v)
}

fn scenario() -> Config {
    let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0, screen::Size::new(16, 16)).unwrap();
    Config::new(viewport, 50).with_threads(1)
}

fn row(grid: &Grid, j: u32) -> Vec<Rgba> {
    (0..grid.width()).map(|i| grid.get(i, j).unwrap()).collect()
}

#[test]
fn scenario_top_row() {
    let grid = render::render(&scenario()).unwrap();
    assert_eq!(
        row(&grid, 0),
        vec![
            b(196),
            K,
            g(191),
            r(190),
            K,
            b(196),
            b(192),
            r(190),
            g(195),
            K,
            r(190),
            b(196),
            K,
            r(194),
            K,
            g(191),
        ]
    );
}

#[test]
fn scenario_real_axis_row() {
    let grid = render::render(&scenario()).unwrap();
    let mut expected = vec![K; 13];
    expected.extend([b(196), b(196), r(194)]);
    assert_eq!(row(&grid, 8), expected);
}

#[test]
fn scenario_is_reproducible() {
    let first = render::render(&scenario()).unwrap();
    let second = render::render(&scenario()).unwrap();
    let parallel = render::render(&scenario().with_threads(3)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn rows_mirror_across_the_real_axis() {
    // Row j samples y = -1 + j/8, so its conjugate is row 16 - j.
    let grid = render::render(&scenario()).unwrap();
    for j in 1..16 {
        assert_eq!(row(&grid, j), row(&grid, 16 - j), "rows {} and {}", j, 16 - j);
    }
}

#[test]
fn origin_renders_black() {
    let c = Complex64::new(0.0, 0.0);
    assert_eq!(escape::classify(c, 1000), Escape::Bounded);
    assert_eq!(colour::colour(escape::classify(c, 1000)), K);
}

#[test]
fn far_point_renders_one_channel() {
    let escape = escape::classify(Complex64::new(3.0, 3.0), 50);
    assert!(matches!(escape, Escape::Divergent { iteration: 0, .. }));
    assert_eq!(colour::colour(escape), r(206));
}

#[test]
fn divergent_point_can_still_be_black() {
    // 2i -> -4 + 2i, |z| ~ 4.47 lands in band 4.
    let escape = escape::classify(Complex64::new(0.0, 2.0), 50);
    assert!(!escape.is_bounded());
    assert_eq!(colour::colour(escape), K);
}

#[test]
fn divergent_pixels_respect_floor_and_exclusivity() {
    let viewport = Preset::Wide.viewport(screen::Size::new(64, 48)).unwrap();
    let maxiters = 100;
    for j in 0..48 {
        for i in 0..64 {
            if let Escape::Divergent { magnitude, .. } =
                escape::classify(viewport.point(i, j), maxiters)
            {
                let band = colour::band(magnitude);
                assert!(colour::brightness(band) >= colour::MIN_BRIGHTNESS);
                let rgba = render::render_pixel(&viewport, maxiters, i, j);
                assert!(rgba.lit_channels() <= 1, "pixel {},{} {:?}", i, j, rgba);
            }
        }
    }
}

#[test]
fn saved_file_decodes_to_the_rendered_grid() {
    let path = std::env::temp_dir().join(format!("mandelbrot-png-{}.png", std::process::id()));
    let config = scenario().with_outfile(path.clone());

    let grid = render::render(&config).unwrap();
    output::save(&grid, &config.outfile).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded.dimensions(), (16, 16));
    assert_eq!(decoded.as_raw().as_slice(), grid.as_bytes());
}
