use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use citas::dates::format_date;
use citas::error::{CitasError, Result};
use citas::model::PatientRecord;
use citas::repo::PatientRepository;
use citas::session::{FormSession, SubmitOutcome};
use citas::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut repo = PatientRepository::open(FileStore::new(data_dir()?));

    match cli.command {
        Some(Commands::List) | None => handle_list(&repo),
        Some(Commands::Show { target }) => handle_show(&repo, &target),
        Some(Commands::Add {
            patient,
            owner,
            email,
            phone,
            date,
            symptoms,
        }) => handle_add(&mut repo, patient, owner, email, phone, date, symptoms),
        Some(Commands::Edit {
            target,
            patient,
            owner,
            email,
            phone,
            date,
            symptoms,
        }) => handle_edit(
            &mut repo, &target, patient, owner, email, phone, date, symptoms,
        ),
        Some(Commands::Delete { target, yes }) => handle_delete(&mut repo, &target, yes),
    }
}

/// Data directory for the persisted blob. `CITAS_DATA_DIR` overrides the
/// platform default, which keeps tests off the real data dir.
fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CITAS_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "citas", "citas")
        .ok_or_else(|| CitasError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Resolve a CLI target (1-based list position or id prefix) to a record.
fn resolve(repo: &PatientRepository<FileStore>, target: &str) -> Result<PatientRecord> {
    if let Ok(n) = target.parse::<usize>() {
        if n >= 1 {
            if let Some(record) = repo.records().get(n - 1) {
                return Ok(record.clone());
            }
        }
    }
    repo.records()
        .iter()
        .find(|r| r.id.starts_with(target))
        .cloned()
        .ok_or_else(|| CitasError::Api(format!("No appointment matches '{}'", target)))
}

fn parse_date_arg(input: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map_err(|e| CitasError::Api(format!("Invalid date '{}': {}", input, e)))?;
    Ok(Utc.from_utc_datetime(&naive))
}

fn handle_list(repo: &PatientRepository<FileStore>) -> Result<()> {
    if repo.is_empty() {
        println!("No appointments.");
        return Ok(());
    }
    for (i, record) in repo.records().iter().enumerate() {
        println!(
            "{} {}  {}",
            format!("{}.", i + 1).yellow(),
            record.patient.bold(),
            format_date(Some(&record.date)).dimmed()
        );
    }
    Ok(())
}

fn handle_show(repo: &PatientRepository<FileStore>, target: &str) -> Result<()> {
    let record = resolve(repo, target)?;
    println!("{}", record.patient.bold());
    println!("--------------------------------");
    println!("Owner:    {}", record.owner);
    println!("Email:    {}", record.email);
    println!("Phone:    {}", record.phone);
    println!("Admitted: {}", format_date(Some(&record.date)));
    println!("Symptoms: {}", record.symptoms);
    println!("{}", format!("id: {}", record.id).dimmed());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    repo: &mut PatientRepository<FileStore>,
    patient: Option<String>,
    owner: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    date: Option<String>,
    symptoms: Option<String>,
) -> Result<()> {
    let mut session = FormSession::new();
    session.open_new();
    apply_fields(&mut session, patient, owner, email, phone, date, symptoms)?;

    match session.submit(repo)? {
        SubmitOutcome::Created(record) => {
            println!(
                "{}",
                format!("Appointment created ({}): {}", record.id, record.patient).green()
            );
        }
        _ => unreachable!("a Creating session commits as Created"),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    repo: &mut PatientRepository<FileStore>,
    target: &str,
    patient: Option<String>,
    owner: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    date: Option<String>,
    symptoms: Option<String>,
) -> Result<()> {
    let record = resolve(repo, target)?;
    let mut session = FormSession::new();
    session.open_edit(&record);
    apply_fields(&mut session, patient, owner, email, phone, date, symptoms)?;

    match session.submit(repo)? {
        SubmitOutcome::Updated(record) => {
            println!(
                "{}",
                format!("Appointment updated: {}", record.patient).green()
            );
        }
        SubmitOutcome::Discarded => {
            println!("{}", "Appointment no longer exists.".dimmed());
        }
        SubmitOutcome::Created(_) => unreachable!("an Editing session never creates"),
    }
    Ok(())
}

fn apply_fields(
    session: &mut FormSession,
    patient: Option<String>,
    owner: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    date: Option<String>,
    symptoms: Option<String>,
) -> Result<()> {
    if let Some(v) = patient {
        session.set_patient(v);
    }
    if let Some(v) = owner {
        session.set_owner(v);
    }
    if let Some(v) = email {
        session.set_email(v);
    }
    if let Some(v) = phone {
        session.set_phone(&v);
    }
    if let Some(v) = symptoms {
        session.set_symptoms(v);
    }
    if let Some(d) = date {
        session.open_date_picker();
        session.confirm_date(parse_date_arg(&d)?);
    }
    Ok(())
}

fn handle_delete(repo: &mut PatientRepository<FileStore>, target: &str, yes: bool) -> Result<()> {
    let record = resolve(repo, target)?;

    if !yes {
        println!("Delete the appointment for {}?", record.patient.bold());
        println!("Once deleted it cannot be recovered.");
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(CitasError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(CitasError::Io)?;

        if input.trim() != "Y" {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    match repo.delete(&record.id) {
        Some(removed) => {
            println!(
                "{}",
                format!("Appointment deleted: {}", removed.patient).green()
            );
        }
        None => {
            println!("{}", "Appointment was already deleted.".dimmed());
        }
    }
    Ok(())
}
