use std::error::Error;
use std::fs;

use tempfile::tempdir;
use tokio::sync::mpsc;

use stencil::config::Section;
use stencil::engine::{dispatch_section, drain_completions, WorkerDone};

type TestResult = Result<(), Box<dyn Error>>;

fn section(vars: &[(&str, &str)]) -> Section {
    let mut s = Section::default();
    for (k, v) in vars {
        s.insert(k.to_string(), v.to_string());
    }
    s
}

#[tokio::test]
async fn zero_matches_spawn_zero_workers_and_do_not_block() -> TestResult {
    let dir = tempdir()?;
    let pattern = format!("{}/*.none", dir.path().display());

    let (tx, rx) = mpsc::channel::<WorkerDone>(64);
    let spawned = dispatch_section(&pattern, &Section::default(), &section(&[("a", "1")]), &tx);
    drop(tx);

    assert_eq!(spawned, 0);
    drain_completions(rx, spawned).await?;

    Ok(())
}

#[tokio::test]
async fn one_worker_per_matched_file_and_all_complete() -> TestResult {
    let dir = tempdir()?;
    for name in ["a.tmpl", "b.tmpl", "c.tmpl"] {
        fs::write(dir.path().join(name), "v=#{{x}}")?;
    }
    let pattern = format!("{}/*.tmpl", dir.path().display());

    let (tx, rx) = mpsc::channel::<WorkerDone>(64);
    let spawned = dispatch_section(&pattern, &section(&[("x", "9")]), &Section::default(), &tx);
    drop(tx);

    assert_eq!(spawned, 3);
    drain_completions(rx, spawned).await?;

    for name in ["a.tmpl", "b.tmpl", "c.tmpl"] {
        assert_eq!(fs::read_to_string(dir.path().join(name))?, "v=9");
    }

    Ok(())
}

#[tokio::test]
async fn failing_workers_still_signal_completion() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("ok.tmpl"), "#{{x}}")?;
    // A directory matching the pattern makes its worker's read fail.
    fs::create_dir(dir.path().join("broken.tmpl"))?;

    let pattern = format!("{}/*.tmpl", dir.path().display());

    let (tx, rx) = mpsc::channel::<WorkerDone>(64);
    let spawned = dispatch_section(&pattern, &section(&[("x", "1")]), &Section::default(), &tx);
    drop(tx);

    assert_eq!(spawned, 2);
    // Must not hang: the failed worker signals too.
    drain_completions(rx, spawned).await?;

    assert_eq!(fs::read_to_string(dir.path().join("ok.tmpl"))?, "1");

    Ok(())
}

#[tokio::test]
async fn local_scope_overrides_global_at_dispatch_time() -> TestResult {
    let dir = tempdir()?;
    let file = dir.path().join("site.tmpl");
    fs::write(&file, "#{{host}}:#{{port}}")?;

    let pattern = format!("{}/*.tmpl", dir.path().display());
    let global = section(&[("host", "localhost"), ("port", "80")]);
    let local = section(&[("port", "8080")]);

    let (tx, rx) = mpsc::channel::<WorkerDone>(64);
    let spawned = dispatch_section(&pattern, &global, &local, &tx);
    drop(tx);

    drain_completions(rx, spawned).await?;

    assert_eq!(fs::read_to_string(&file)?, "localhost:8080");

    Ok(())
}
