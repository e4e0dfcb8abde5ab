use clap::{Parser, Subcommand};

mod db;
mod vendor;

#[derive(Debug, Parser)]
#[command(name = "tms-app", about = "Transport Management System CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Vendor(vendor::VendorCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Vendor(command) => vendor::run(command).await,
        }
    }
}
