use clap::Args;
use eyre::Result;
use viewgen_tree::{Destination, Render};

use super::UnwrapOrExit;
use crate::demos;

#[derive(Args)]
pub struct MarkupCommand {
    /// Lines listed in the last paragraph
    pub args: Vec<String>,
}

impl MarkupCommand {
    /// Run the markup command
    pub fn run(&self) -> Result<()> {
        print!("{}", self.output().unwrap_or_exit());
        Ok(())
    }

    /// Greeting, argument echo, then the rendered page.
    fn output(&self) -> viewgen_tree::Result<String> {
        // markup is destination independent
        let page = demos::kotlin_page(&self.args)?;
        Ok(format!(
            "Hello World!\nProgram arguments: {}\n{}",
            self.args.join(", "),
            page.to_text(Destination::default())
        ))
    }
}
