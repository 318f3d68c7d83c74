use clap::Args;
use eyre::Result;
use viewgen_core::Destination;

#[derive(Args)]
pub struct DestinationsCommand {}

impl DestinationsCommand {
    pub fn run(&self) -> Result<()> {
        println!("Destinations:");
        for destination in Destination::ALL {
            let marker = if destination == Destination::default() {
                " (default)"
            } else {
                ""
            };
            println!(
                "  {:<10}{}{}",
                destination.as_str(),
                destination.display_name(),
                marker
            );
        }
        Ok(())
    }
}
