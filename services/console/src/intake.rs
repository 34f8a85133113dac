use crate::render::{render_intake, render_summary, write_json};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use zoo_registry::error::AppError;
use zoo_registry::zoo::{IntakeManifest, IntakeOutcome, ZooService, ZooSummary};

#[derive(Args, Debug)]
pub(crate) struct IntakeArgs {
    /// Path to the JSON intake manifest
    pub(crate) manifest: PathBuf,
    /// Print the intake outcome and summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct IntakeReport<'a> {
    intake: &'a IntakeOutcome,
    summary: &'a ZooSummary,
}

pub(crate) fn run_intake(args: IntakeArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_intake(&args, &mut out)
}

fn execute_intake<W: Write>(args: &IntakeArgs, out: &mut W) -> Result<(), AppError> {
    let manifest = IntakeManifest::from_path(&args.manifest)?;
    let mut zoo = ZooService::new();
    let outcome = manifest.apply(&mut zoo);
    let summary = zoo.summary();

    if args.json {
        write_json(
            out,
            &IntakeReport {
                intake: &outcome,
                summary: &summary,
            },
        )?;
    } else {
        render_intake(out, &outcome)?;
        writeln!(out)?;
        render_summary(out, &summary)?;
    }
    Ok(())
}
