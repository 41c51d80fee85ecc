mod common;

use common::*;
use image::ColorType;

#[test]
fn test_generate_default_icon() -> anyhow::Result<()> {
    let (generator, dir) = create_test_generator();

    let path = generator.generate(128)?;
    assert_eq!(path, dir.path().join("icon128.png"));
    assert!(path.exists());

    let img = image::open(&path)?;
    assert_eq!(img.color(), ColorType::Rgb8);
    assert_eq!((img.width(), img.height()), (128, 128));

    let img = img.to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, BACKGROUND);
    assert_eq!(img.get_pixel(127, 0).0, BACKGROUND);
    assert_eq!(img.get_pixel(0, 127).0, BACKGROUND);
    assert_eq!(img.get_pixel(127, 127).0, BACKGROUND);
    assert_eq!(img.get_pixel(64, 64).0, FOREGROUND);

    Ok(())
}

#[test]
fn test_rectangle_corners_are_inclusive() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();
    let img = load_icon(&generator.generate(128)?);

    assert_eq!(img.get_pixel(32, 32).0, FOREGROUND);
    assert_eq!(img.get_pixel(96, 96).0, FOREGROUND);
    assert_eq!(img.get_pixel(96, 32).0, FOREGROUND);
    assert_eq!(img.get_pixel(31, 31).0, BACKGROUND);
    assert_eq!(img.get_pixel(97, 97).0, BACKGROUND);
    assert_eq!(img.get_pixel(97, 64).0, BACKGROUND);

    let filled = img.pixels().filter(|p| p.0 == FOREGROUND).count();
    assert_eq!(filled, 65 * 65);

    Ok(())
}

#[test]
fn test_dimensions_and_center_across_sizes() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();

    for size in [4u32, 5, 7, 16, 33, 48, 100] {
        let img = load_icon(&generator.generate(size)?);
        assert_eq!(img.dimensions(), (size, size), "size {}", size);
        assert_eq!(img.get_pixel(0, 0).0, BACKGROUND, "size {}", size);
        assert_eq!(img.get_pixel(size / 2, size / 2).0, FOREGROUND, "size {}", size);
    }

    Ok(())
}

#[test]
fn test_tiny_sizes_are_all_foreground() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();

    for size in 1u32..=3 {
        let img = load_icon(&generator.generate(size)?);
        assert_eq!(img.dimensions(), (size, size));
        assert!(img.pixels().all(|p| p.0 == FOREGROUND), "size {}", size);
    }

    Ok(())
}

#[test]
fn test_generate_is_byte_identical() -> anyhow::Result<()> {
    let (generator, dir) = create_test_generator();

    let first = std::fs::read(generator.generate(128)?)?;
    let second = std::fs::read(generator.generate(128)?)?;
    assert_eq!(first, second);

    let other = tempfile::TempDir::new()?;
    let third = std::fs::read(
        IconGenerator::new()
            .with_output_dir(other.path())
            .generate(128)?,
    )?;
    assert_eq!(first, third);

    // Only the one file, overwritten in place
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);

    Ok(())
}

#[test]
fn test_generate_overwrites_existing_file() -> anyhow::Result<()> {
    let (generator, dir) = create_test_generator();
    let path = dir.path().join("icon16.png");
    std::fs::write(&path, b"not a png")?;

    generator.generate(16)?;
    let img = load_icon(&path);
    assert_eq!(img.dimensions(), (16, 16));

    Ok(())
}

#[test]
fn test_zero_size_is_rejected() {
    let (generator, dir) = create_test_generator();

    assert!(generator.render(0).is_err());
    assert!(generator.generate(0).is_err());
    assert!(!dir.path().join("icon0.png").exists());
}

#[test]
fn test_missing_output_dir_fails() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let generator = IconGenerator::new().with_output_dir(dir.path().join("missing"));

    let err = generator.generate(32).unwrap_err();
    assert!(err.to_string().contains("icon32.png"));
}

#[test]
fn test_render_matches_written_file() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();

    let in_memory = generator.render(48)?;
    let on_disk = load_icon(&generator.generate(48)?);
    assert_eq!(in_memory, on_disk);

    Ok(())
}

#[test]
fn test_custom_colors() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();
    let generator = generator
        .with_background(Color::new(0, 0, 0))
        .with_foreground("#ff8000".parse()?);

    let img = generator.render(64)?;
    assert_eq!(Color::from(*img.get_pixel(0, 0)), Color::new(0, 0, 0));
    assert_eq!(img.get_pixel(32, 32).0, [255, 128, 0]);

    Ok(())
}

#[test]
fn test_generate_all_writes_each_size() -> anyhow::Result<()> {
    let (generator, dir) = create_test_generator();

    let paths = generator.generate_all(&[16, 48, 128])?;
    assert_eq!(
        paths,
        vec![
            dir.path().join("icon16.png"),
            dir.path().join("icon48.png"),
            dir.path().join("icon128.png"),
        ]
    );
    for (path, size) in paths.iter().zip([16u32, 48, 128]) {
        assert_eq!(load_icon(path).dimensions(), (size, size));
    }

    Ok(())
}

#[test]
fn test_generate_all_stops_at_first_failure() {
    let (generator, dir) = create_test_generator();

    assert!(generator.generate_all(&[16, 0, 32]).is_err());
    assert!(dir.path().join("icon16.png").exists());
    assert!(!dir.path().join("icon32.png").exists());
}

#[test]
fn test_debug_snapshots() -> anyhow::Result<()> {
    let (generator, _dir) = create_test_generator();
    let debug = tempfile::TempDir::new()?;
    let debug_root = debug.path().join("debug");
    let generator = generator.with_debug(debug_root.clone())?;

    generator.generate(32)?;

    let step_dir = debug_root.join("32");
    let background = load_icon(&step_dir.join("01_fill_background.png"));
    assert!(background.pixels().all(|p| p.0 == BACKGROUND));

    let drawn = load_icon(&step_dir.join("02_centered_rectangle.png"));
    assert_eq!(drawn.get_pixel(16, 16).0, FOREGROUND);
    assert!(step_dir.join("03_save_png.png").exists());

    Ok(())
}

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let debug = tempfile::TempDir::new()?;
    std::fs::write(debug.path().join("leftover.txt"), b"x")?;

    let result = IconGenerator::new().with_debug(debug.path().to_path_buf());
    assert!(result.is_err());

    Ok(())
}

#[test]
fn test_render_with_debug_writes_nothing() -> anyhow::Result<()> {
    let (generator, dir) = create_test_generator();
    let debug = tempfile::TempDir::new()?;
    let debug_root = debug.path().join("debug");
    let generator = generator.with_debug(debug_root.clone())?;

    let img = generator.render(32)?;
    assert_eq!(img.dimensions(), (32, 32));

    assert!(!debug_root.join("32").exists());
    assert_eq!(std::fs::read_dir(&debug_root)?.count(), 0);
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}
