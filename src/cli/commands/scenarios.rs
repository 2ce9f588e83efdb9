//! Scenarios command - List preset starting boards

use anyhow::Result;

use crate::{
    cli::output::{print_section, print_subsection},
    tictactoe::Scenario,
};

pub fn execute() -> Result<()> {
    print_section("Preset scenarios");
    for scenario in Scenario::ALL {
        print_subsection(scenario.name());
        println!("{}", scenario.board());
    }
    Ok(())
}
