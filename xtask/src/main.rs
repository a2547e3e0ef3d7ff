//! Custom cargo commands for allo-search.
//!
//! Usage:
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Native + wasm check, tests, clippy
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack
//!   cargo xtask fuzz <T>    - Run one fuzz target (nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const FUZZ_TARGETS: &[&str] = &["score_calculation", "highlight_escaping", "remote_payload"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test        Run all Rust tests
  check       Quick check (native + wasm32 check, tests, clippy)
  bench       Run benchmarks
  build-wasm  Build pkg/ for the browser with wasm-pack
  fuzz <T>    Run a fuzz target: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Run all tests
fn test() -> Result<()> {
    run(project_root()?, "cargo", &["test"])
}

/// Native and wasm32 builds must both type-check
fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run(root.clone(), "cargo", &["check", "--all-targets"])?;

    println!("[2/4] cargo check (wasm)...");
    run(
        root.clone(),
        "cargo",
        &["check", "--lib", "--features", "wasm", "--target", WASM_TARGET],
    )?;

    println!("[3/4] cargo test...");
    run(root.clone(), "cargo", &["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run(root, "cargo", &["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run(project_root()?, "cargo", &["bench"])
}

/// Build the npm-style package into pkg/
fn build_wasm() -> Result<()> {
    run(
        project_root()?,
        "wasm-pack",
        &["build", "--target", "web", "--release", "--", "--features", "wasm"],
    )?;
    println!("\n✓ Browser package written to pkg/");
    Ok(())
}

/// Run one fuzz target from fuzz/
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("Usage: cargo xtask fuzz <{}>", FUZZ_TARGETS.join("|"));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("Unknown fuzz target {:?}", target);
    }
    run(project_root()?, "cargo", &["+nightly", "fuzz", "run", target])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run(dir: PathBuf, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(&dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}
