use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use assert_fs::TempDir;
use image::{GrayImage, ImageBuffer, Luma};
use predicates::prelude::*;

macro_rules! cargo_run {
    ($($args:expr),*) => {
        {
            let mut cmd = Command::cargo_bin("histmatch")?;
            $(cmd.arg($args);)*
            cmd.assert()
        }
    };
}

fn write_png(path: &Path, level: u8) -> Result<()> {
    let img: GrayImage = ImageBuffer::from_pixel(100, 100, Luma([level]));
    img.save(path)?;
    Ok(())
}

#[test]
fn add_and_search() -> Result<()> {
    let conf_dir = TempDir::new()?;
    let dataset = conf_dir.path().join("dataset");
    std::fs::create_dir_all(&dataset)?;
    write_png(&dataset.join("cat.png"), 128)?;
    write_png(&dataset.join("dog.png"), 255)?;

    cargo_run!("-c", conf_dir.path(), "add", &dataset)
        .success()
        .stdout(predicate::str::contains("cat.png"))
        .stdout(predicate::str::contains("dog.png"));

    let query = conf_dir.path().join("query.png");
    write_png(&query, 128)?;

    cargo_run!("-c", conf_dir.path(), "search", &query)
        .success()
        .stdout(predicate::str::starts_with("1.0000"))
        .stdout(predicate::str::contains("cat.png"));

    Ok(())
}

#[test]
fn search_json_output() -> Result<()> {
    let conf_dir = TempDir::new()?;
    let dataset = conf_dir.path().join("dataset");
    std::fs::create_dir_all(&dataset)?;
    write_png(&dataset.join("cat.png"), 60)?;

    cargo_run!("-c", conf_dir.path(), "add", &dataset).success();

    let query = conf_dir.path().join("query.png");
    write_png(&query, 60)?;

    cargo_run!("-c", conf_dir.path(), "search", &query, "--output-format", "json")
        .success()
        .stdout(predicate::str::contains("cat.png"));

    Ok(())
}

#[test]
fn search_empty_database() -> Result<()> {
    let conf_dir = TempDir::new()?;
    let query = conf_dir.path().join("query.png");
    write_png(&query, 60)?;

    cargo_run!("-c", conf_dir.path(), "search", &query).success().stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn add_skips_non_image_files() -> Result<()> {
    let conf_dir = TempDir::new()?;
    let dataset = conf_dir.path().join("dataset");
    std::fs::create_dir_all(&dataset)?;
    write_png(&dataset.join("cat.png"), 128)?;
    std::fs::write(dataset.join("broken.png"), b"not an image")?;

    cargo_run!("-c", conf_dir.path(), "add", &dataset)
        .success()
        .stdout(predicate::str::contains("cat.png"))
        .stderr(predicate::str::contains("broken.png"));

    Ok(())
}
