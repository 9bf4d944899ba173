// CLI command definitions

use super::gateway::{GenerateCommand, InspectCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "appgw-template",
    version,
    about = "Application Gateway resource synthesizer for cluster deployment templates",
    long_about = "A standalone CLI tool that turns a cluster API model and its appgw-ingress addon options into the Application Gateway resource of a deployment template"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate the Application Gateway resource as JSON
    Generate(GenerateCommand),

    /// Show a summary of the synthesized gateway and its references
    Inspect(InspectCommand),
}
