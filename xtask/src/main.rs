// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo tooling the jobs service runs in CI, plus
//! `verify-schema`, which applies the embedded migrations to an in-memory
//! database and checks the resulting schema.
//!
//! Run with `cargo xtask <command>`.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::collections::BTreeSet;
use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use splits_persistence::{EXPECTED_TABLES, Persistence};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, audit, build, test and verify the schema
    CI,

    /// Build every crate and target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every crate and target
    #[command(visible_alias = "c")]
    Check,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Audit dependencies with cargo-deny
    #[command(visible_alias = "cd")]
    Deny,

    /// Find unused dependencies with cargo-machete
    #[command(visible_alias = "m")]
    Machete,

    /// Run clippy, rustdoc and rustfmt checks
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs for the service crates with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit, router and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Check the migrated schema against the tables the service expects
    #[command(visible_alias = "vs")]
    VerifySchema,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(vec!["build", "--all-targets"]),
            Self::Check => run_cargo(vec!["check", "--all-targets"]),
            Self::Coverage => run_cargo(vec![
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Deny => run_cargo(vec!["deny", "check"]),
            Self::Machete => {
                cmd!("cargo-machete").run_with_trace()?;
                Ok(())
            }
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(vec!["fmt", "--all", "--check"]),
            Self::FixClippy => run_cargo(vec![
                "clippy",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
            ]),
            Self::FixFormatting => run_cargo_nightly(vec!["fmt", "--all"]),
            Self::Test => test(),
            Self::VerifySchema => verify_schema(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    Command::Deny.run()?;
    Command::Machete.run()?;
    Command::Build.run()?;
    test()?;
    verify_schema()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

fn lint_clippy() -> Result<()> {
    run_cargo(vec!["clippy", "--all-targets", "--", "-D", "warnings"])
}

/// Builds docs for each default member the way docs.rs would.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly")
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])?;
    // Doc tests last; they are the slowest.
    run_cargo(vec!["test", "--workspace", "--doc"])
}

/// Applies the embedded migrations to a fresh in-memory database and checks
/// that every expected table exists and no foreign key is violated.
fn verify_schema() -> Result<()> {
    tracing::info!("Starting schema verification");

    let mut persistence =
        Persistence::new_in_memory().wrap_err("failed to open in-memory database")?;
    persistence
        .verify_schema()
        .wrap_err("schema verification failed")?;

    let tables: BTreeSet<String> = persistence
        .list_tables()
        .wrap_err("failed to list tables")?
        .into_iter()
        .collect();
    let unexpected: Vec<&String> = tables
        .iter()
        .filter(|table| !EXPECTED_TABLES.contains(&table.as_str()))
        .filter(|table| !table.starts_with("__diesel"))
        .collect();
    if !unexpected.is_empty() {
        tracing::warn!("tables not covered by verification: {unexpected:?}");
    }

    tracing::info!(
        "schema verified: {} expected tables present, foreign keys consistent",
        EXPECTED_TABLES.len()
    );
    Ok(())
}

fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // Set by cargo for subcommands; it would pin the stable toolchain.
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
