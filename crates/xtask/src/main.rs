use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

/// Internal crates each workspace crate may depend on.
const ALLOWED_INTERNAL_DEPS: &[(&str, &[&str])] = &[
    ("rucksack-domain", &[]),
    ("rucksack-shared", &["rucksack-domain"]),
    ("rucksack-engine", &["rucksack-domain", "rucksack-shared"]),
    ("xtask", &[]),
];

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    path: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Verify the dependency direction domain <- shared <- engine.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = find_violations(&metadata);

    if violations.is_empty() {
        println!("arch-check: ok ({} crates)", metadata.packages.len());
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} dependency rule violation(s)", violations.len())
    }
}

fn find_violations(metadata: &Metadata) -> Vec<String> {
    let allowed: HashMap<&str, &[&str]> = ALLOWED_INTERNAL_DEPS.iter().copied().collect();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let Some(allowed_deps) = allowed.get(package.name.as_str()) else {
            violations.push(format!("unknown workspace crate `{}`", package.name));
            continue;
        };
        for dep in package.dependencies.iter().filter(|d| d.path.is_some()) {
            if !allowed_deps.contains(&dep.name.as_str()) {
                violations.push(format!(
                    "`{}` must not depend on `{}`",
                    package.name, dep.name
                ));
            }
        }
    }

    violations
}
