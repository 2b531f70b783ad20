//! Tests running the png2sp1 binary.

mod common;

use std::process::{Command, Output};

use common::fixtures::colors;
use common::{assert_array, assert_contains, TestDir};

fn png2sp1(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png2sp1"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run png2sp1")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_list_colors() {
    let output = png2sp1(&["--list-colors"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Color list: black, blue, bright-blue, red, bright-red, magenta, bright-magenta, \
         green, bright-green, cyan, bright-cyan, yellow, bright-yellow, white, bright-white\n"
    );
}

#[test]
fn test_missing_image() {
    let output = png2sp1(&[]);

    assert!(!output.status.success());
    assert_contains(&stderr(&output), "<IMAGE>");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_convert_to_stdout() {
    let dir = TestDir::new();
    let path = dir.solid_png("black.png", 8, 8, colors::BLACK);

    let output = png2sp1(&["-i", "sprite", path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let source = stdout(&output);
    assert_contains(&source, "/* png2sp1 ");
    assert_array(&source, "const uchar psprite[]", &[20, 0x07, 128, 13, 0]);
    assert_contains(&source, "#define SPRITE_BASE 128\n#define SPRITE_LEN 1\n");
    assert_array(&source, "const uchar sprite[]", &[0; 8]);
}

#[test]
fn test_convert_to_file_with_config() {
    let dir = TestDir::new();
    let path = dir.solid_png("black.png", 16, 8, colors::BLACK);
    let config = dir.config("png2sp1.yaml", "base: 64\nid: logo\narray: true\n");
    let out = dir.path().join("logo.h");

    let output = png2sp1(&[
        "-c",
        config.to_str().unwrap(),
        "-b",
        "200",
        "--map",
        "-o",
        out.to_str().unwrap(),
        path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let source = std::fs::read_to_string(&out).unwrap();
    assert_contains(&source, " * base: 200\n");
    assert_contains(&source, "const struct sp1_tp logo_tbl[] = {\n{ 0x07, 0xc8 }\n};\n");
    assert_array(&source, "const uchar logo_m[]", &[0, 0]);
    assert_array(&source, "const uchar plogo[]", &[20, 0x07, 200, 200, 13, 0]);
}

#[test]
fn test_invalid_color_name() {
    let dir = TestDir::new();
    let path = dir.solid_png("black.png", 8, 8, colors::BLACK);

    let output = png2sp1(&["--preferred-bg", "purple", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_contains(&stderr(&output), "invalid color name 'purple'");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_conversion_error_exits_non_zero() {
    let dir = TestDir::new();
    let path = dir.solid_png("orange.png", 8, 8, colors::ORANGE);

    let output = png2sp1(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_contains(&stderr(&output), "invalid color (255, 128, 0) in image at (0, 0)");
    assert!(stdout(&output).is_empty());
}
