use std::collections::HashMap;
use std::path::{Path, PathBuf};

use page_enhance::{CliArgs, ProgressMode};
use tempfile::tempdir;

const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Records</title></head>
  <body>
    <header><button type="button" id="theme-toggle">Theme</button></header>
    <div class="flash flash-success">Record saved</div>
    <div class="flash flash-error">Session expired</div>
    <div class="flash flash-success">2 documents uploaded</div>
    <main><p>content</p></main>
  </body>
</html>"#;

fn write_page(dir: &Path, html: &str) -> PathBuf {
    let path = dir.join("page.html");
    std::fs::write(&path, html).unwrap();
    path
}

fn base_args(input: Option<PathBuf>, prefs: PathBuf, out: PathBuf) -> CliArgs {
    CliArgs {
        sample: input.is_none(),
        input,
        prefs,
        toggle_id: "theme-toggle".to_string(),
        flash_class: "flash".to_string(),
        clicks: 0,
        settle: false,
        fade_ms: 20,
        remove_ms: 10,
        out: Some(out),
        progress: ProgressMode::Never,
    }
}

fn stored_prefs(path: &Path) -> HashMap<String, String> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn applies_persisted_light_theme() {
    let tmp = tempdir().unwrap();
    let input = write_page(tmp.path(), PAGE);
    let prefs = tmp.path().join("prefs.json");
    std::fs::write(&prefs, r#"{"theme": "light"}"#).unwrap();
    let out = tmp.path().join("out.html");

    let args = base_args(Some(input), prefs, out.clone());
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("class=\"light-mode\""));
    assert!(html.contains("☀️"));
}

#[tokio::test]
async fn defaults_to_dark_without_a_preference() {
    let tmp = tempdir().unwrap();
    let input = write_page(tmp.path(), PAGE);
    let prefs = tmp.path().join("prefs.json");
    let out = tmp.path().join("out.html");

    let args = base_args(Some(input), prefs.clone(), out.clone());
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("light-mode"));
    assert!(html.contains("🌙"));
    // Initialization only reads the store; nothing gets written back.
    assert!(!prefs.exists());
}

#[tokio::test]
async fn garbage_preference_falls_back_to_dark() {
    let tmp = tempdir().unwrap();
    let input = write_page(tmp.path(), PAGE);
    let prefs = tmp.path().join("prefs.json");
    std::fs::write(&prefs, r#"{"theme": "solarized"}"#).unwrap();
    let out = tmp.path().join("out.html");

    let args = base_args(Some(input), prefs, out.clone());
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("light-mode"));
    assert!(html.contains("🌙"));
}

#[tokio::test]
async fn click_flips_the_theme_and_persists_it() {
    let tmp = tempdir().unwrap();
    let input = write_page(tmp.path(), PAGE);
    let prefs = tmp.path().join("prefs.json");
    let out = tmp.path().join("out.html");

    let mut args = base_args(Some(input.clone()), prefs.clone(), out.clone());
    args.clicks = 1;
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("class=\"light-mode\""));
    assert!(html.contains("☀️"));
    assert_eq!(
        stored_prefs(&prefs),
        HashMap::from([("theme".to_string(), "light".to_string())])
    );

    // Next load starts from the persisted value; one more click goes back
    // to dark and writes that back too.
    let mut args = base_args(Some(input), prefs.clone(), out.clone());
    args.clicks = 1;
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("light-mode"));
    assert!(html.contains("🌙"));
    assert_eq!(
        stored_prefs(&prefs),
        HashMap::from([("theme".to_string(), "dark".to_string())])
    );
}

#[tokio::test]
async fn settle_strips_every_banner() {
    let tmp = tempdir().unwrap();
    let input = write_page(tmp.path(), PAGE);
    let prefs = tmp.path().join("prefs.json");
    let out = tmp.path().join("out.html");

    let mut args = base_args(Some(input.clone()), prefs.clone(), out.clone());
    page_enhance::run(args).await.unwrap();
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Record saved"));

    args = base_args(Some(input), prefs, out.clone());
    args.settle = true;
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("class=\"flash"));
    assert!(!html.contains("Record saved"));
    assert!(!html.contains("Session expired"));
    assert!(html.contains("content"));
}

#[tokio::test]
async fn missing_toggle_control_is_tolerated() {
    let tmp = tempdir().unwrap();
    let input = write_page(
        tmp.path(),
        "<html><body><div class=\"flash\">hi</div></body></html>",
    );
    let prefs = tmp.path().join("prefs.json");
    let out = tmp.path().join("out.html");

    let mut args = base_args(Some(input), prefs.clone(), out.clone());
    args.clicks = 2;
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(!html.contains("light-mode"));
    // No control, no click handling, no write-back.
    assert!(!prefs.exists());
}

#[tokio::test]
async fn sample_page_round_trips() {
    let tmp = tempdir().unwrap();
    let prefs = tmp.path().join("prefs.json");
    let out = tmp.path().join("out.html");

    let mut args = base_args(None, prefs, out.clone());
    args.settle = true;
    page_enhance::run(args).await.unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("🌙"));
    assert!(!html.contains("class=\"flash"));
}
