use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "pictofont_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const CATALOG: &str = r#"[
    {"slug": "a", "hex": "ff0000", "path": "M0 0H24V24H0Z"},
    {"slug": "b", "hex": "00ff00", "path": "M0 0H12V24H0Z"}
]"#;

fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("icons.json");
    fs::write(&path, CATALOG).expect("write catalog");
    path
}

fn run_pictofont(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pictofont"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run pictofont")
}

#[test]
fn builds_font_documents_and_stylesheet() {
    let dir = TestDir::new("full_build");
    let catalog = write_catalog(&dir.path);
    let out = dir.path.join("out");

    let output = run_pictofont(
        &[catalog.to_str().unwrap(), "-o", out.to_str().unwrap()],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let regular = fs::read_to_string(out.join("svg/Pictofont-Regular.svg")).expect("regular svg");
    let squared = fs::read_to_string(out.join("svg/Pictofont-Squared.svg")).expect("squared svg");
    let css = fs::read_to_string(out.join("pictofont.css")).expect("stylesheet");

    // "a" fills the 24×24 box: codepoint 0xEA01, full advance.
    assert!(
        regular.contains("glyph-name=\"a\" unicode=\"&#xEA01;\""),
        "regular: {regular}"
    );
    assert!(
        regular.contains("glyph-name=\"b\" unicode=\"&#xEA02;\""),
        "regular: {regular}"
    );
    // "b" is half-width: aspect-preserved advance 600 under Regular,
    // fixed 1200 under Squared.
    assert!(regular.contains("horiz-adv-x=\"600\""), "regular: {regular}");
    assert!(
        !squared.contains("horiz-adv-x=\"600\""),
        "squared: {squared}"
    );

    assert!(
        css.contains(".pf-a::before { content: \"\\ea01\"; }"),
        "css: {css}"
    );
    assert!(
        css.contains(".pf-a.pf--color::before { color: #ff0000; }"),
        "css: {css}"
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TestDir::new("determinism");
    let catalog = write_catalog(&dir.path);
    let out1 = dir.path.join("out1");
    let out2 = dir.path.join("out2");

    for out in [&out1, &out2] {
        let output = run_pictofont(
            &[catalog.to_str().unwrap(), "-o", out.to_str().unwrap()],
            &dir.path,
        );
        assert!(output.status.success(), "process failed: {output:?}");
    }

    let svg1 = fs::read(out1.join("svg/Pictofont-Regular.svg")).unwrap();
    let svg2 = fs::read(out2.join("svg/Pictofont-Regular.svg")).unwrap();
    assert_eq!(svg1, svg2);
    let css1 = fs::read(out1.join("pictofont.css")).unwrap();
    let css2 = fs::read(out2.join("pictofont.css")).unwrap();
    assert_eq!(css1, css2);
}

#[test]
fn filter_preserves_codepoint_slots_by_default() {
    let dir = TestDir::new("preserve");
    let catalog = write_catalog(&dir.path);
    let out = dir.path.join("out");

    let output = run_pictofont(
        &[
            catalog.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--only",
            "b",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let regular = fs::read_to_string(out.join("svg/Pictofont-Regular.svg")).unwrap();
    assert!(!regular.contains("glyph-name=\"a\""), "got: {regular}");
    // "a" was skipped but still consumed 0xEA01.
    assert!(
        regular.contains("glyph-name=\"b\" unicode=\"&#xEA02;\""),
        "got: {regular}"
    );
}

#[test]
fn no_preserve_slots_reuses_codepoints() {
    let dir = TestDir::new("no_preserve");
    let catalog = write_catalog(&dir.path);
    let out = dir.path.join("out");

    let output = run_pictofont(
        &[
            catalog.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--only",
            "b",
            "--no-preserve-slots",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let regular = fs::read_to_string(out.join("svg/Pictofont-Regular.svg")).unwrap();
    assert!(
        regular.contains("glyph-name=\"b\" unicode=\"&#xEA01;\""),
        "got: {regular}"
    );
}

#[test]
fn custom_name_and_prefix() {
    let dir = TestDir::new("naming");
    let catalog = write_catalog(&dir.path);
    let out = dir.path.join("out");

    let output = run_pictofont(
        &[
            catalog.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--name",
            "Iconic",
            "--prefix",
            "ic",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let regular = fs::read_to_string(out.join("svg/Iconic-Regular.svg")).unwrap();
    assert!(regular.contains("id=\"Iconic-Regular\""), "got: {regular}");

    let css = fs::read_to_string(out.join("iconic.css")).unwrap();
    assert!(css.contains(".ic-a::before"), "got: {css}");
    assert!(css.contains("font-family: 'Iconic';"), "got: {css}");
}

#[test]
fn filter_matching_nothing_still_succeeds() {
    let dir = TestDir::new("empty_result");
    let catalog = write_catalog(&dir.path);
    let out = dir.path.join("out");

    let output = run_pictofont(
        &[
            catalog.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--only",
            "nonexistent",
        ],
        &dir.path,
    );
    assert!(output.status.success(), "process failed: {output:?}");

    let regular = fs::read_to_string(out.join("svg/Pictofont-Regular.svg")).unwrap();
    assert!(!regular.contains("<glyph "), "got: {regular}");
}

#[test]
fn malformed_catalog_fails_with_message() {
    let dir = TestDir::new("bad_catalog");
    let catalog = dir.path.join("icons.json");
    fs::write(&catalog, "{not json").expect("write catalog");

    let output = run_pictofont(&[catalog.to_str().unwrap()], &dir.path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("catalog"), "stderr: {stderr}");
}

#[test]
fn bad_glyph_path_names_the_slug() {
    let dir = TestDir::new("bad_glyph");
    let catalog = dir.path.join("icons.json");
    fs::write(
        &catalog,
        r#"[{"slug": "broken", "hex": "ff0000", "path": "Mx y"}]"#,
    )
    .expect("write catalog");

    let output = run_pictofont(&[catalog.to_str().unwrap()], &dir.path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"), "stderr: {stderr}");
}
