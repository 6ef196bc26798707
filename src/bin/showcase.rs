//! Factory Method demo: assemble each gadget variant and print its feature
//! list.
//!
//! Run with: cargo run --bin showcase

use std::io::{self, Write};
use std::process;

use colored::Colorize;
use gadget_factory::{report, Blueprint, Gadget, GadgetError, Mobile, Tablet};

fn run(out: &mut impl Write) -> Result<(), GadgetError> {
    let lineup: Vec<Box<dyn Blueprint>> = vec![Box::new(Mobile), Box::new(Tablet)];

    let mut gadgets = Vec::with_capacity(lineup.len());
    for blueprint in &lineup {
        gadgets.push(Gadget::build(blueprint.as_ref())?);
    }

    report::write_showcase(out, &gadgets)
}

fn main() {
    let stdout = io::stdout();
    if let Err(err) = run(&mut stdout.lock()) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}
