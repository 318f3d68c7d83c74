use clap::Args;
use eyre::Result;
use viewgen_tree::Render;

use super::{TargetArgs, UnwrapOrExit};
use crate::demos;

#[derive(Args)]
pub struct ViewCommand {
    /// Container name, rendered as `{name}View` or `{name}Content`
    #[arg(short, long, default_value = "Poetry")]
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

impl ViewCommand {
    /// Run the view command
    pub fn run(&self) -> Result<()> {
        let destination = self.target.resolve().unwrap_or_exit();
        let page = demos::poetry_page(&self.name).unwrap_or_exit();

        tracing::debug!(%destination, name = %self.name, "rendering sample page");
        println!("{}", page.to_text(destination));

        Ok(())
    }
}
