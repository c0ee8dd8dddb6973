use crate::scaler::{Scaler, ScalerOpts};
use crate::task::TaskRunner;
use anyhow::Result;
use std::path::Path;

/// One entry of the icon set, named in points with a display scale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconSpec {
    pub points: u32,
    pub scale: u32,
    pub filename: &'static str,
}

impl IconSpec {
    pub const fn pixel_size(self) -> u32 {
        self.points * self.scale
    }
}

/// Every icon an `AppIcon.appiconset` requires, in generation order. The
/// @2x entry of each pair shares its pixel size with the next @1x entry.
pub const MACOS_ICON_SPECS: [IconSpec; 10] = [
    IconSpec { points: 16, scale: 1, filename: "icon_16x16.png" },
    IconSpec { points: 16, scale: 2, filename: "icon_16x16@2x.png" },
    IconSpec { points: 32, scale: 1, filename: "icon_32x32.png" },
    IconSpec { points: 32, scale: 2, filename: "icon_32x32@2x.png" },
    IconSpec { points: 128, scale: 1, filename: "icon_128x128.png" },
    IconSpec { points: 128, scale: 2, filename: "icon_128x128@2x.png" },
    IconSpec { points: 256, scale: 1, filename: "icon_256x256.png" },
    IconSpec { points: 256, scale: 2, filename: "icon_256x256@2x.png" },
    IconSpec { points: 512, scale: 1, filename: "icon_512x512.png" },
    IconSpec { points: 512, scale: 2, filename: "icon_512x512@2x.png" },
];

/// Writes the full icon set into `output_dir`, one file per table entry,
/// sequentially. A failed entry aborts the remaining ones.
pub fn write_iconset(
    scaler: &Scaler,
    output_dir: &Path,
    padding_fraction: f32,
    verbose: bool,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let mut runner = TaskRunner::new(MACOS_ICON_SPECS.len() as u32, verbose);
    for spec in &MACOS_ICON_SPECS {
        let size = spec.pixel_size();
        let opts = ScalerOpts::with_padding_fraction(size, padding_fraction)?;
        let path = output_dir.join(spec.filename);
        runner.start_task(format!("{} ({}x{})", path.display(), size, size));
        scaler.write_file(&path, opts)?;
        runner.end_task();
    }
    Ok(())
}
