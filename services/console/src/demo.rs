use crate::render::{render_summary, write_json};
use clap::Args;
use std::io::{self, Write};
use zoo_registry::error::AppError;
use zoo_registry::zoo::{Animal, AnimalError, Thing, ZooService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_demo(&args, &mut out)
}

fn execute_demo<W: Write>(args: &DemoArgs, out: &mut W) -> Result<(), AppError> {
    let zoo = reference_zoo()?;
    let summary = zoo.summary();

    if args.json {
        write_json(out, &summary)?;
    } else {
        render_summary(out, &summary)?;
    }
    Ok(())
}

/// Two herbivores and a wolf get in, the tiger is turned away, and the office
/// furniture is registered.
fn reference_zoo() -> Result<ZooService, AnimalError> {
    let mut zoo = ZooService::new();

    zoo.admit(Animal::monkey("Chicha", 3, 1001, 8)?);
    zoo.admit(Animal::rabbit("Bucks", 1, 1002, 6)?);
    zoo.admit(Animal::tiger("Shere Khan", 7, 2001, 9)?);
    zoo.admit(Animal::wolf("Grey", 5, 2002, 6)?);

    zoo.add_thing(Thing::table(3001, "Desk"));
    zoo.add_thing(Thing::computer(3002, "PC"));

    Ok(zoo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_zoo_matches_expected_holdings() {
        let summary = reference_zoo().expect("reference animals valid").summary();

        assert_eq!(summary.animals_count, 3);
        assert_eq!(summary.total_food_kg_per_day, 9);
        assert_eq!(summary.interactive_names, ["Monkey(Chicha)", "Rabbit(Bucks)"]);
        assert_eq!(summary.all_inventory.len(), 5);
    }

    #[test]
    fn text_demo_lists_inventory() {
        let mut buffer = Vec::new();
        execute_demo(&DemoArgs { json: false }, &mut buffer).expect("demo runs");
        let text = String::from_utf8(buffer).expect("utf-8 output");

        assert!(text.contains("Animals on site: 3"));
        assert!(text.contains("Daily food requirement: 9 kg"));
        assert!(text.contains("- Monkey(Chicha)"));
        assert!(text.contains("- #3002 Computer(PC)"));
        assert!(!text.contains("Tiger"));
    }

    #[test]
    fn json_demo_is_machine_readable() {
        let mut buffer = Vec::new();
        execute_demo(&DemoArgs { json: true }, &mut buffer).expect("demo runs");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");

        assert_eq!(value["animals_count"], 3);
        assert_eq!(value["all_inventory"][0]["display_name"], "Monkey(Chicha)");
    }
}
