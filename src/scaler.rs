use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Transparent margin on each side, as a fraction of the edge length.
pub const DEFAULT_PADDING_FRACTION: f32 = 0.08;

#[derive(Clone, Copy, Debug)]
pub struct ScalerOpts {
    size: u32,
    padding_fraction: f32,
}

impl ScalerOpts {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            padding_fraction: DEFAULT_PADDING_FRACTION,
        }
    }

    pub fn with_padding_fraction(size: u32, padding_fraction: f32) -> Result<Self> {
        anyhow::ensure!(size > 0, "expected a positive icon size");
        anyhow::ensure!(
            (0.0..0.5).contains(&padding_fraction),
            "padding fraction {} out of range [0, 0.5)",
            padding_fraction
        );
        Ok(Self {
            size,
            padding_fraction,
        })
    }

    pub fn size(self) -> u32 {
        self.size
    }

    /// Margin in pixels on each side of the canvas.
    pub fn padding(self) -> u32 {
        (self.size as f32 * self.padding_fraction) as u32
    }

    /// Edge length of the inner square that holds the resized image.
    pub fn content_size(self) -> u32 {
        self.size - 2 * self.padding()
    }
}

/// Renders padded square icons from a single source image.
///
/// The source is decoded once and normalized to RGBA. It is expected to be
/// square; a non-square source is stretched to fill the content region.
pub struct Scaler {
    img: RgbaImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = ImageReader::open(path)?.decode()?.to_rgba8();
        let (width, height) = img.dimensions();
        if width != height {
            tracing::warn!("source image is {width}x{height}, it will be stretched to square");
        }
        Ok(Self::from_image(img))
    }

    pub fn from_image(img: RgbaImage) -> Self {
        Self { img }
    }

    /// Encodes one padded rendition as PNG into `w`.
    pub fn write<W: Write + Seek>(&self, w: &mut W, opts: ScalerOpts) -> Result<()> {
        self.render(opts).write_to(w, ImageFormat::Png)?;
        Ok(())
    }

    /// Writes one padded rendition to `path`, overwriting an existing file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, opts: ScalerOpts) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write(&mut BufWriter::new(file), opts)
    }

    fn render(&self, opts: ScalerOpts) -> RgbaImage {
        let padding = opts.padding();
        let content_size = opts.content_size();
        let content =
            image::imageops::resize(&self.img, content_size, content_size, FilterType::Lanczos3);
        // a fresh buffer is zeroed, so the margin is already fully transparent
        let mut canvas = RgbaImage::new(opts.size(), opts.size());
        image::imageops::replace(&mut canvas, &content, padding as i64, padding as i64);
        canvas
    }
}
