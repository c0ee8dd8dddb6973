use anyhow::Result;
use iconpad::config::Config;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

const EXPECTED: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

fn write_source(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("source.png");
    RgbaImage::from_pixel(128, 128, Rgba([0, 128, 255, 255])).save(&path)?;
    Ok(path)
}

#[test]
fn generates_the_full_icon_set() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let icon = write_source(tmp.path())?;
    let output_dir = tmp.path().join("AppIcon.appiconset");
    let config = Config {
        icon,
        output_dir: output_dir.clone(),
        padding_fraction: 0.08,
    };
    iconpad::generate(&config, true)?;

    for (name, size) in EXPECTED {
        let img = image::open(output_dir.join(name))?.to_rgba8();
        assert_eq!(img.dimensions(), (size, size), "{name}");
        let padding = (size as f32 * 0.08) as u32;
        for i in 0..size {
            for d in 0..padding {
                assert_eq!(img.get_pixel(i, d)[3], 0, "{name} top margin");
                assert_eq!(img.get_pixel(i, size - 1 - d)[3], 0, "{name} bottom margin");
                assert_eq!(img.get_pixel(d, i)[3], 0, "{name} left margin");
                assert_eq!(img.get_pixel(size - 1 - d, i)[3], 0, "{name} right margin");
            }
        }
        // the content region starts right after the margin and is opaque
        assert_eq!(img.get_pixel(padding, padding)[3], 255, "{name}");
        let far = size - padding - 1;
        assert_eq!(img.get_pixel(far, far)[3], 255, "{name}");
    }
    Ok(())
}

#[test]
fn rerunning_is_idempotent() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let icon = write_source(tmp.path())?;
    let output_dir = tmp.path().join("icons");
    let config = Config {
        icon,
        output_dir: output_dir.clone(),
        padding_fraction: 0.08,
    };
    iconpad::generate(&config, true)?;
    let first = std::fs::read(output_dir.join("icon_512x512@2x.png"))?;
    iconpad::generate(&config, true)?;
    let second = std::fs::read(output_dir.join("icon_512x512@2x.png"))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_source_touches_nothing() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let config = Config {
        icon: tmp.path().join("absent.png"),
        output_dir: tmp.path().join("icons"),
        padding_fraction: 0.08,
    };
    iconpad::generate(&config, false)?;
    assert!(!tmp.path().join("icons").exists());
    Ok(())
}

#[test]
fn invalid_padding_fraction_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let icon = write_source(tmp.path())?;
    let config = Config {
        icon,
        output_dir: tmp.path().join("icons"),
        padding_fraction: 0.5,
    };
    assert!(iconpad::generate(&config, true).is_err());
    Ok(())
}
