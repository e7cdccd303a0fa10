use bellows::config::CONFIG_FILE;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bellows", version, about = "Bellows CLI")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Click an empty-section placeholder and print the updated page
    AddRow(AddRowArgs),
    /// Save a section form to the server
    Submit(SubmitArgs),
    /// Print the urlencoded body a section form would send
    Fields(FieldsArgs),
}

#[derive(Args)]
pub struct AddRowArgs {
    /// HTML page to load
    #[arg(long)]
    pub page: PathBuf,
    /// Id of the element to click
    #[arg(long)]
    pub target: String,
    /// Clone the hidden template row of the section
    #[arg(long)]
    pub template: bool,
    /// Write the updated page here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// HTML page to load
    #[arg(long)]
    pub page: PathBuf,
    /// Id of the form, defaults to the first section form
    #[arg(long)]
    pub form: Option<String>,
    /// Server the form action is resolved against
    #[arg(long)]
    pub base_url: Option<String>,
    /// Write the updated page here
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// HTML page to load
    #[arg(long)]
    pub page: PathBuf,
    /// Id of the form, defaults to the first section form
    #[arg(long)]
    pub form: Option<String>,
}
