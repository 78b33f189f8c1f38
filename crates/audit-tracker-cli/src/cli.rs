use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "audit-tracker")]
#[command(about = "Audit Tracker - audits, findings and corrective actions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://audit_tracker.db")]
    pub database_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start API server
    Serve {
        /// Address to bind
        #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "API_PORT", default_value = "5000")]
        port: u16,
    },

    /// Create the database tables if they do not exist
    InitDb,
}
