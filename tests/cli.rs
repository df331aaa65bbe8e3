//! End-to-end CLI tests — run the binary against a temp project directory
//! and inspect the artifacts it writes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(root: &Path, output: &Path, command: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gita-gen"))
        .args([
            command,
            "--root",
            root.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run gita-gen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A minimal project: config pointing at a custom base URL, one Telugu video
/// catalog, content for the first two verses.
fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("config.toml"),
        "base_url = \"https://gita.example.org\"\n",
    )
    .unwrap();

    let videos = tmp.path().join("data/verse-videos");
    fs::create_dir_all(&videos).unwrap();
    fs::write(
        videos.join("te_videos.json"),
        r#"[
            {"title": "భగవద్గీత 1.1: అర్జున విషాద యోగం", "videoId": "t11", "embedLink": "https://www.youtube.com/embed/t11"},
            {"title": "భగవద్గీత 1.2: వ్యాఖ్యానం", "videoId": "t12", "embedLink": "https://www.youtube.com/embed/t12"},
            {"title": "no reference in this one", "videoId": "zz", "embedLink": "https://www.youtube.com/embed/zz"}
        ]"#,
    )
    .unwrap();

    for verse in 1..=2 {
        let dir = tmp
            .path()
            .join("content/chapter-1")
            .join(format!("verse-{verse}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("sanskrit-shloka.txt"), "धर्मक्षेत्रे\n").unwrap();
        fs::write(dir.join("romanized-transliteration.txt"), "dharma-kṣetre\n").unwrap();
        fs::write(dir.join("english-translation.txt"), "On the field\n").unwrap();
        fs::write(dir.join("word-by-word-translation.txt"), "dharma = duty\n").unwrap();
    }

    tmp
}

#[test]
fn build_writes_all_artifacts() {
    let project = setup_project();
    let out = TempDir::new().unwrap();

    let result = run(project.path(), out.path(), "build");
    assert!(result.status.success(), "{}", stdout(&result));

    assert!(out.path().join("routes.json").is_file());
    assert!(out.path().join("sitemap.xml").is_file());
    assert!(out.path().join("videos.json").is_file());
}

#[test]
fn routes_json_uses_configured_base_url() {
    let project = setup_project();
    let out = TempDir::new().unwrap();

    let result = run(project.path(), out.path(), "routes");
    assert!(result.status.success());

    let routes: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("routes.json")).unwrap())
            .unwrap();
    let routes = routes.as_array().unwrap();

    // home + chapters index + 18 chapters + 700 verses + 3 static pages
    assert_eq!(routes.len(), 723);
    assert_eq!(routes[0]["url"], "https://gita.example.org");
    assert_eq!(
        routes[2]["url"],
        "https://gita.example.org/chapters/1"
    );
    assert_eq!(routes[2]["changefreq"], "monthly");
}

#[test]
fn sitemap_covers_last_verse() {
    let project = setup_project();
    let out = TempDir::new().unwrap();

    let result = run(project.path(), out.path(), "sitemap");
    assert!(result.status.success());

    let xml = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://gita.example.org/chapters/18/verse/78</loc>"));
    assert_eq!(xml.matches("<url>").count(), 723);
}

#[test]
fn videos_json_indexes_catalog_and_skips_unparseable() {
    let project = setup_project();
    let out = TempDir::new().unwrap();

    let result = run(project.path(), out.path(), "videos");
    assert!(result.status.success());
    let text = stdout(&result);
    assert!(text.contains("Telugu (2 verses covered)"), "{text}");
    assert!(text.contains("Skipped: 1 records"), "{text}");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("videos.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["1-1"]["te"]["videoId"], "t11");
    assert_eq!(manifest["1-2"]["te"]["videoId"], "t12");
    assert!(manifest.get("1-3").is_none());
}

#[test]
fn check_reports_missing_content() {
    let project = setup_project();
    let out = TempDir::new().unwrap();

    let result = run(project.path(), out.path(), "check");
    assert!(result.status.success());

    let text = stdout(&result);
    assert!(text.contains("2 of 700 verses have content"), "{text}");
    assert!(text.contains("698 verses missing content"), "{text}");
    assert!(text.contains("001 Arjuna Vishada Yoga (47 verses)"), "{text}");
}

#[test]
fn check_succeeds_on_empty_project() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    // No config.toml, no content — defaults apply, nothing has content
    let result = run(tmp.path(), out.path(), "check");
    assert!(result.status.success());
    assert!(stdout(&result).contains("0 of 700 verses have content"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "base_url = \"not-a-url\"\n").unwrap();

    let result = run(tmp.path(), out.path(), "routes");
    assert!(!result.status.success());
}

#[test]
fn gen_config_prints_parseable_toml() {
    let result = Command::new(env!("CARGO_BIN_EXE_gita-gen"))
        .arg("gen-config")
        .output()
        .expect("failed to run gita-gen");
    assert!(result.status.success());

    let parsed: toml::Value = toml::from_str(&stdout(&result)).unwrap();
    assert_eq!(
        parsed["default_video_language"].as_str(),
        Some("te")
    );
}
