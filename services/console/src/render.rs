use serde::Serialize;
use std::io::{self, Write};
use zoo_registry::error::AppError;
use zoo_registry::zoo::{IntakeOutcome, ZooSummary};

pub(crate) fn render_summary<W: Write>(out: &mut W, summary: &ZooSummary) -> io::Result<()> {
    writeln!(out, "Zoo holdings")?;
    writeln!(out, "Animals on site: {}", summary.animals_count)?;
    writeln!(
        out,
        "Daily food requirement: {} kg",
        summary.total_food_kg_per_day
    )?;

    if summary.interactive_names.is_empty() {
        writeln!(out, "\nContact zoo candidates: none")?;
    } else {
        writeln!(out, "\nContact zoo candidates")?;
        for name in &summary.interactive_names {
            writeln!(out, "- {name}")?;
        }
    }

    if summary.all_inventory.is_empty() {
        writeln!(out, "\nInventory: empty")?;
    } else {
        writeln!(out, "\nInventory")?;
        for entry in &summary.all_inventory {
            writeln!(out, "- #{} {}", entry.number, entry.display_name)?;
        }
    }

    Ok(())
}

pub(crate) fn render_intake<W: Write>(out: &mut W, outcome: &IntakeOutcome) -> io::Result<()> {
    writeln!(out, "Intake results")?;
    for name in &outcome.admitted {
        writeln!(out, "- admitted {name}")?;
    }
    for rejected in &outcome.rejected {
        writeln!(
            out,
            "- rejected {}: {}",
            rejected.display_name, rejected.reason
        )?;
    }
    for invalid in &outcome.invalid {
        writeln!(
            out,
            "- invalid entry #{} ({}): {}",
            invalid.index, invalid.name, invalid.error
        )?;
    }
    writeln!(out, "- things registered: {}", outcome.things_registered)
}

pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
