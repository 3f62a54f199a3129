//! Film

use pbrt_core::pbrt::*;
use pbrt_core::spectrum::*;
use image::{ImageBuffer, ImageFormat, Rgb};

/// A rectangular block of rendered pixels.
#[derive(Clone, Debug)]
pub struct FilmTile {
    /// Left pixel column, inclusive.
    pub x0: usize,

    /// Top pixel row, inclusive.
    pub y0: usize,

    /// Right pixel column, exclusive.
    pub x1: usize,

    /// Bottom pixel row, exclusive.
    pub y1: usize,

    /// Pixel values in row major order.
    pub pixels: Vec<Spectrum>,
}

impl FilmTile {
    /// Returns a new black `FilmTile` covering `[x0, x1) x [y0, y1)`.
    ///
    /// * `x0` - Left pixel column, inclusive.
    /// * `y0` - Top pixel row, inclusive.
    /// * `x1` - Right pixel column, exclusive.
    /// * `y1` - Bottom pixel row, exclusive.
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            pixels: Vec::with_capacity((x1 - x0) * (y1 - y0)),
        }
    }
}

/// Holds the final image.
#[derive(Clone, Debug)]
pub struct Film {
    /// Width in pixels.
    pub width: usize,

    /// Height in pixels.
    pub height: usize,

    /// Pixel values in row major order.
    pixels: Vec<Spectrum>,
}

impl Film {
    /// Returns a new black `Film`.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Spectrum::ZERO; width * height],
        }
    }

    /// Returns the pixel value at `(x, y)`.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    pub fn get_pixel(&self, x: usize, y: usize) -> Spectrum {
        self.pixels[y * self.width + x]
    }

    /// Copies a rendered tile into the image.
    ///
    /// * `tile` - The tile.
    pub fn merge_film_tile(&mut self, tile: &FilmTile) {
        let tile_width = tile.x1 - tile.x0;
        for (i, row) in (tile.y0..tile.y1).enumerate() {
            let src = &tile.pixels[i * tile_width..(i + 1) * tile_width];
            let start = row * self.width + tile.x0;
            self.pixels[start..start + tile_width].copy_from_slice(src);
        }
    }

    /// Writes the image as an 8-bit PNG. Values are clamped to `[0, 1]`.
    ///
    /// * `path` - Output file path.
    pub fn write_png(&self, path: &str) -> Result<(), String> {
        info!(
            "Writing image {path} with resolution {}x{}",
            self.width, self.height
        );

        let mut imgbuf = ImageBuffer::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
            let [r, g, b] = self.get_pixel(x as usize, y as usize).to_rgb();
            *pixel = Rgb([clamp_byte(r), clamp_byte(g), clamp_byte(b)]);
        }

        match imgbuf.save_with_format(path, ImageFormat::Png) {
            Ok(()) => Ok(()),
            Err(err) => Err(format!("Error saving output image {path}: {err}.")),
        }
    }
}

/// Clamp floating point value to 8-bit range [0, 255].
///
/// * `v` - Value to clamp.
#[inline]
fn clamp_byte(v: Float) -> u8 {
    (255.0 * clamp(v, 0.0, 1.0) + 0.5) as u8
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_byte_range() {
        assert_eq!(clamp_byte(-1.0), 0);
        assert_eq!(clamp_byte(0.0), 0);
        assert_eq!(clamp_byte(0.5), 128);
        assert_eq!(clamp_byte(1.0), 255);
        assert_eq!(clamp_byte(7.0), 255);
        assert_eq!(clamp_byte(Float::NAN), 0);
    }

    #[test]
    fn merge_tile_places_pixels() {
        let mut film = Film::new(4, 3);
        let mut tile = FilmTile::new(2, 1, 4, 3);
        for i in 0..4 {
            tile.pixels.push(Spectrum::new(i as Float));
        }
        film.merge_film_tile(&tile);

        assert_eq!(film.get_pixel(0, 0), Spectrum::ZERO);
        assert_eq!(film.get_pixel(2, 1), Spectrum::new(0.0));
        assert_eq!(film.get_pixel(3, 1), Spectrum::new(1.0));
        assert_eq!(film.get_pixel(2, 2), Spectrum::new(2.0));
        assert_eq!(film.get_pixel(3, 2), Spectrum::new(3.0));
    }

    #[test]
    fn write_png_round_trip() {
        let mut film = Film::new(2, 1);
        let mut tile = FilmTile::new(0, 0, 2, 1);
        tile.pixels.push(Spectrum::from_rgb(1.0, 0.0, 0.0));
        tile.pixels.push(Spectrum::from_rgb(0.0, 2.0, 0.5));
        film.merge_film_tile(&tile);

        let path = std::env::temp_dir().join(format!("lumen-film-{}.png", std::process::id()));
        let path = path.to_string_lossy().to_string();
        film.write_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 128]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_png_reports_errors() {
        let film = Film::new(1, 1);
        assert!(film.write_png("/nonexistent-dir/lumen.png").is_err());
    }
}
