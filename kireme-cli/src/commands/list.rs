//! List command implementation

use anyhow::Result;
use kireme_api::{Language, Method};

use super::ListCommands;

/// Execute the list command
pub fn execute(subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            for language in Language::all() {
                println!("{} - {}", language.code(), language.name());
            }
        }
        ListCommands::Methods => {
            for method in Method::all() {
                println!("{} - {}", method.id(), method.describe());
            }
        }
        ListCommands::Formats => {
            println!("text - numbered sentences with a summary footer");
            println!("json - the service response as pretty-printed JSON");
            println!("markdown - numbered list with markup-safe escaping");
        }
    }

    Ok(())
}
