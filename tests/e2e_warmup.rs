
use std::fs;
use std::process::Output;

use tempfile::tempdir;

use support_sitemap::{run_wakeup, sitemap_for, spawn_site};

fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_warmup_primes_then_bursts_each_url() -> Result<(), String> {
    let sitemap = sitemap_for(&["/a", "/transcript/1", "/transcript/2", "/b"]);
    let site = spawn_site(&[
        ("/sitemap.xml", 200, sitemap.as_str()),
        ("/a", 200, "a"),
        ("/transcript/1", 200, "t1"),
        ("/transcript/2", 200, "t2"),
        ("/b", 503, "down"),
    ])?;

    let output = run_wakeup([
        "--pause".to_owned(),
        "0".to_owned(),
        site.url("/sitemap.xml"),
        "3".to_owned(),
        "/transcript/".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let paths = site.paths()?;
    let mut expected = vec![
        "/sitemap.xml".to_owned(),
        "/a".to_owned(),
        "/transcript/1".to_owned(),
        "/b".to_owned(),
    ];
    for path in ["/a", "/transcript/1", "/b"] {
        for _ in 0..3 {
            expected.push(path.to_owned());
        }
    }
    if paths != expected {
        return Err(format!("Unexpected request order: {:?}", paths));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let checks = [
        "SITE WARM-UP",
        "Testing 3 total URLs.",
        "RUNNING WITH ONE WORKER TO WAKE SYSTEMS...",
        "RUNNING FULL POWER WITH 3 WORKERS...",
        "Statuses: {503}",
        "Total requests: 12",
    ];
    for check in checks {
        if !stdout.contains(check) {
            return Err(format!("Missing {:?} in output\n{}", check, describe(&output)));
        }
    }
    Ok(())
}

#[test]
fn e2e_warmup_fails_when_sitemap_is_unavailable() -> Result<(), String> {
    let site = spawn_site(&[("/sitemap.xml", 500, "boom"), ("/a", 200, "a")])?;

    let output = run_wakeup([site.url("/sitemap.xml"), "2".to_owned(), "--no-banner".to_owned()])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("500") {
        return Err(format!("Expected status in error\n{}", describe(&output)));
    }
    if site.paths()? != vec!["/sitemap.xml".to_owned()] {
        return Err(format!("Unexpected requests: {:?}", site.paths()?));
    }
    Ok(())
}

#[test]
fn e2e_warmup_fails_on_malformed_sitemap() -> Result<(), String> {
    let site = spawn_site(&[("/sitemap.xml", 200, "<urlset><url><loc>oops</url>")])?;

    let output = run_wakeup([site.url("/sitemap.xml"), "2".to_owned()])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if site.paths()?.len() != 1 {
        return Err(format!("Unexpected requests: {:?}", site.paths()?));
    }
    Ok(())
}

#[test]
fn e2e_warmup_rejects_zero_workers() -> Result<(), String> {
    let output = run_wakeup(["http://127.0.0.1:9/sitemap.xml", "0"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_warmup_reads_config_file() -> Result<(), String> {
    let sitemap = sitemap_for(&["/tags/a", "/tags/b", "/c"]);
    let site = spawn_site(&[
        ("/sitemap.xml", 200, sitemap.as_str()),
        ("/tags/a", 200, "a"),
        ("/tags/b", 200, "b"),
        ("/c", 200, "c"),
    ])?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = dir.path().join("wakeup.toml");
    fs::write(
        &config,
        "ignore_patterns = [\"/tags/\"]\npause = 0\nno_banner = true\ntimeout = \"5s\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_wakeup([
        site.url("/sitemap.xml"),
        "2".to_owned(),
        "--config".to_owned(),
        config.to_string_lossy().into_owned(),
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let paths = site.paths()?;
    if paths.iter().any(|path| path == "/tags/b") {
        return Err(format!("Config pattern was ignored: {:?}", paths));
    }
    if paths.len() != 7 {
        return Err(format!("Expected 7 requests, got {:?}", paths));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("SITE WARM-UP") {
        return Err(format!("Banner should be disabled\n{}", describe(&output)));
    }
    Ok(())
}
