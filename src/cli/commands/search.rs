use crate::cli::parser::Commands;
use crate::core::search::{ResultSurface, surface_for};
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::results_table;

/// Handle the one-shot `search` command.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Search { query } = cmd {
        let data = Dataset::sample()?;

        match surface_for(query, &data.index) {
            ResultSurface::Hidden => info("Type at least 2 characters to search."),
            ResultSurface::Empty => println!("No results found"),
            ResultSurface::Results(results) => {
                print!("{}", results_table(&results, None));
                println!("\n{} result(s)", results.len());
            }
        }
    }

    Ok(())
}
