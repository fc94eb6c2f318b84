use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_exprstat"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn run_artifact(args: &[&str]) -> serde_json::Value {
    let out = run(args);
    assert!(
        out.status.success(),
        "{:?} should succeed, stderr={}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_eq!(v.get("schema_version").and_then(|x| x.as_str()), Some("exprstat_pmf_plot_v0"));
    v
}

fn series(v: &serde_json::Value) -> &Vec<serde_json::Value> {
    v.get("series").and_then(|x| x.as_array()).expect("series should be array")
}

#[test]
fn viz_narrow_contract() {
    let v = run_artifact(&["viz", "narrow"]);
    let s = series(&v);
    assert_eq!(s.len(), 3);
    assert_eq!(s[0]["x"].as_array().unwrap().len(), 80);
    assert_eq!(v["x_label"], "Product count (n_p)");
}

#[test]
fn viz_bursty_custom_dispersions() {
    let v = run_artifact(&["viz", "bursty", "--mu", "20", "--r", "2", "--r", "50"]);
    let s = series(&v);
    assert_eq!(s.len(), 2);
    assert_eq!(s[1]["label"], "\u{03BC}=20, r=50");
}

#[test]
fn viz_switching_contract() {
    let v = run_artifact(&["viz", "switching"]);
    assert_eq!(v["legend_title"], "ON-State Probability");
    assert_eq!(series(&v).len(), 3);
}

#[test]
fn viz_sweep_contract() {
    let v = run_artifact(&["viz", "sweep"]);
    let s = series(&v);
    assert_eq!(s.len(), 1);
    assert_eq!(s[0]["x"].as_array().unwrap().len(), 500);
    assert_eq!(s[0]["y"][0].as_f64(), Some(0.0));
    let text = v["annotation"]["text"].as_str().unwrap();
    assert!(text.contains("k_cat = 100"));
}

#[test]
fn viz_style_file_overrides() {
    let dir = std::env::temp_dir().join(format!("exprstat_style_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("style.yaml");
    std::fs::write(&path, "theme: minimal\nline_width: 3.5\n").unwrap();

    let v = run_artifact(&["viz", "narrow", "--style", path.to_string_lossy().as_ref()]);
    assert_eq!(v["style"]["theme"], "minimal");
    assert_eq!(v["style"]["line_width"].as_f64(), Some(3.5));
    assert_eq!(v["style"]["grid"]["show"], false);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn viz_invalid_style_fails() {
    let dir = std::env::temp_dir().join(format!("exprstat_bad_style_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("style.yaml");
    std::fs::write(&path, "line_width: [\n").unwrap();

    let out = run(&["viz", "narrow", "--style", path.to_string_lossy().as_ref()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Config error"));

    std::fs::remove_dir_all(&dir).ok();
}
