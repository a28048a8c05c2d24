//! Build script for jumble_app
//!
//! Exposes the short git commit hash as `JUMBLE_GIT_COMMIT` for the About row.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=JUMBLE_GIT_COMMIT");
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    // Packagers without a checkout can pin the value
    let commit = std::env::var("JUMBLE_GIT_COMMIT")
        .ok()
        .filter(|c| !c.trim().is_empty())
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=JUMBLE_GIT_COMMIT={}", commit.trim());
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
