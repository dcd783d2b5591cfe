use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn run(bin: &str, dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    Command::cargo_bin(bin)
        .unwrap()
        .current_dir(dir)
        .args(args)
        .assert()
}

fn output(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("out.poly")).unwrap()
}

#[test]
fn csv2poly_writes_out_poly() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rings.csv"),
        "x,y,attr\n0,0,a\n1,0,a\n1,1,a\n0,0,a\n",
    )
    .unwrap();

    run("csv2poly", dir.path(), &["rings.csv", "2"]).success();

    assert_eq!(
        output(&dir),
        "-1.000000 -0.500000\n1.000000 -0.500000\n1.000000 1.500000\n*\n"
    );
}

#[test]
fn csv2poly_requires_scale() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rings.csv"), "x,y\n0,0\n").unwrap();

    run("csv2poly", dir.path(), &["rings.csv"]).failure();
    assert!(!dir.path().join("out.poly").exists());
}

#[test]
fn csv2poly_bad_number_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.poly"), "1.000000 1.000000\n").unwrap();
    fs::write(dir.path().join("bad.csv"), "x,y\n0,0\n1,oops\n").unwrap();

    run("csv2poly", dir.path(), &["bad.csv", "1"]).failure();
    assert_eq!(output(&dir), "1.000000 1.000000\n");
}

#[test]
fn scale_poly_scales_without_centering() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("in.poly"),
        "0.000000 0.000000\n2.000000 0.000000\n*\n",
    )
    .unwrap();

    run("scale-poly", dir.path(), &["in.poly", "1.5"]).success();

    assert_eq!(output(&dir), "0.000000 0.000000\n3.000000 0.000000\n*\n");
}

#[test]
fn scale_poly_centers_with_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("in.poly"),
        "0.000000 0.000000\n2.000000 0.000000\n*\n",
    )
    .unwrap();

    run("scale-poly", dir.path(), &["in.poly", "1", "-c"]).success();

    assert_eq!(output(&dir), "-0.666667 0.000000\n1.333333 0.000000\n*\n");
}

#[test]
fn scale_poly_ignores_unknown_third_argument() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.poly"), "1.000000 2.000000\n*\n").unwrap();

    run("scale-poly", dir.path(), &["in.poly", "1", "center"]).success();

    assert_eq!(output(&dir), "1.000000 2.000000\n*\n");
}

#[test]
fn scale_poly_rejects_extra_argument_with_center() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.poly"), "1.000000 2.000000\n*\n").unwrap();

    run("scale-poly", dir.path(), &["in.poly", "1", "foo", "-c"]).failure();
    assert!(!dir.path().join("out.poly").exists());
}

#[test]
fn scale_poly_accepts_negative_scale() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.poly"), "1.000000 2.000000\n").unwrap();

    run("scale-poly", dir.path(), &["in.poly", "-1"]).success();

    assert_eq!(output(&dir), "-1.000000 -2.000000\n");
}

#[test]
fn scale_poly_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    run("scale-poly", dir.path(), &["missing.poly", "1"]).failure();
}
