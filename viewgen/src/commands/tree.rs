use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::demos;

#[derive(Args)]
pub struct TreeCommand {
    /// Container name of the sample page
    #[arg(short, long, default_value = "Poetry")]
    pub name: String,
}

impl TreeCommand {
    /// Run the tree command
    pub fn run(&self) -> Result<()> {
        let page = demos::poetry_page(&self.name).unwrap_or_exit();
        let json = serde_json::to_string_pretty(&page).wrap_err("Failed to serialize tree")?;
        println!("{json}");
        Ok(())
    }
}
