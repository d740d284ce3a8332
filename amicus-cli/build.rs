use std::process::Command;

/// Exposes the short git SHA as `AMICUS_BUILD_SHA` for `amicus --version`.
fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let workspace = format!("{crate_dir}/..");

    println!("cargo:rerun-if-changed={workspace}/.git/HEAD");

    let sha = Command::new("git")
        .args(["-C", &workspace, "rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "dev".to_string());

    println!("cargo:rustc-env=AMICUS_BUILD_SHA={sha}");
}
