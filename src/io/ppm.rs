use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::image::{Rgb, RgbImage};
use crate::io::open_maybe_gz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Ascii,
    Binary,
}

pub fn read_ppm(path: &Path) -> Result<RgbImage> {
    let mut reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_ppm(&bytes)
}

pub fn parse_ppm(bytes: &[u8]) -> Result<RgbImage> {
    let mut cursor = Cursor { bytes, pos: 0 };
    let encoding = match cursor.token()? {
        b"P6" => Encoding::Binary,
        b"P3" => Encoding::Ascii,
        other => bail!(
            "unsupported PPM magic {:?}; expected P6 or P3",
            String::from_utf8_lossy(other)
        ),
    };
    let width = cursor.number("width")?;
    let height = cursor.number("height")?;
    let maxval = cursor.number("maxval")?;
    if maxval == 0 || maxval > 255 {
        bail!("PPM maxval must be in 1..=255, found {}", maxval);
    }
    let n = width
        .checked_mul(height)
        .context("PPM dimensions overflow")?;
    let raster = n.checked_mul(3).context("PPM dimensions overflow")?;

    let pixels: Vec<Rgb> = match encoding {
        Encoding::Binary => {
            // Exactly one whitespace byte separates the header from the raster.
            cursor.pos += 1;
            let data = &bytes[cursor.pos.min(bytes.len())..];
            if data.len() < raster {
                bail!(
                    "PPM raster truncated: expected {} bytes, found {}",
                    raster,
                    data.len()
                );
            }
            let mut pixels = Vec::with_capacity(n);
            for chunk in data[..raster].chunks_exact(3) {
                pixels.push([
                    scale(chunk[0] as usize, maxval)?,
                    scale(chunk[1] as usize, maxval)?,
                    scale(chunk[2] as usize, maxval)?,
                ]);
            }
            pixels
        }
        Encoding::Ascii => {
            // Each sample needs at least one digit and one separator.
            let remaining = bytes.len().saturating_sub(cursor.pos);
            let mut pixels = Vec::with_capacity(n.min(remaining / 6));
            for _ in 0..n {
                let r = cursor.number("red sample")?;
                let g = cursor.number("green sample")?;
                let b = cursor.number("blue sample")?;
                pixels.push([scale(r, maxval)?, scale(g, maxval)?, scale(b, maxval)?]);
            }
            pixels
        }
    };

    Ok(RgbImage {
        width,
        height,
        pixels,
    })
}

pub fn write_ppm(path: &Path, image: &RgbImage) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write!(w, "P6\n{} {}\n255\n", image.width, image.height)?;
    for px in &image.pixels {
        w.write_all(px)?;
    }
    w.flush()?;
    Ok(())
}

fn scale(v: usize, maxval: usize) -> Result<u8> {
    if v > maxval {
        bail!("PPM sample {} exceeds maxval {}", v, maxval);
    }
    Ok(((v * 255 + maxval / 2) / maxval) as u8)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn skip_blank(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'#' => {
                    while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn token(&mut self) -> Result<&'a [u8]> {
        self.skip_blank();
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            bail!("unexpected end of PPM data");
        }
        Ok(&self.bytes[start..self.pos])
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let tok = self.token().with_context(|| format!("missing PPM {}", what))?;
        std::str::from_utf8(tok)
            .ok()
            .and_then(|s| s.parse().ok())
            .with_context(|| format!("invalid PPM {}", what))
    }
}
