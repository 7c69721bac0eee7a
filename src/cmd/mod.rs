use crate::{pkg::server::listen, prelude::Result};
use clap::{Args, Parser, Subcommand};

mod browse;

#[derive(Parser)]
#[command(about = "job openings board")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub function: Option<String>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// serve the job board over http
    Listen,
    /// print open jobs grouped by department
    List(FilterArgs),
    /// print one job and the other openings in its department
    Show { id: String },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::List(filters)) => {
            browse::list(filters).await?;
        }
        Some(SubCommandType::Show { id }) => {
            browse::show(&id).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
