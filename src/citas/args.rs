use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "citas")]
#[command(about = "Appointment manager for veterinary clinics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List appointments
    #[command(alias = "ls")]
    List,

    /// Show the full details of an appointment
    #[command(alias = "v")]
    Show {
        /// List position (1, 2, ...) or id prefix
        target: String,
    },

    /// Register a new appointment
    #[command(alias = "n")]
    Add {
        /// Patient name
        #[arg(long)]
        patient: Option<String>,

        /// Owner name
        #[arg(long)]
        owner: Option<String>,

        /// Owner email
        #[arg(long)]
        email: Option<String>,

        /// Owner phone (at most 10 characters)
        #[arg(long)]
        phone: Option<String>,

        /// Admission date, "YYYY-MM-DD HH:MM" (defaults to now)
        #[arg(long)]
        date: Option<String>,

        /// Patient symptoms
        #[arg(long)]
        symptoms: Option<String>,
    },

    /// Edit an existing appointment
    #[command(alias = "e")]
    Edit {
        /// List position (1, 2, ...) or id prefix
        target: String,

        /// Patient name
        #[arg(long)]
        patient: Option<String>,

        /// Owner name
        #[arg(long)]
        owner: Option<String>,

        /// Owner email
        #[arg(long)]
        email: Option<String>,

        /// Owner phone (at most 10 characters)
        #[arg(long)]
        phone: Option<String>,

        /// Admission date, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        date: Option<String>,

        /// Patient symptoms
        #[arg(long)]
        symptoms: Option<String>,
    },

    /// Delete an appointment
    #[command(alias = "rm")]
    Delete {
        /// List position (1, 2, ...) or id prefix
        target: String,

        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },
}
