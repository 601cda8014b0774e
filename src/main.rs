use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use clinic_desk::demo::seed_sample_clinic;
use clinic_desk::{format_id, ClinicRegistry};

#[derive(Parser, Debug)]
#[command(name = "clinic-desk", version, about = "Clinic front-desk registry")]
struct Cli {
    /// Patient file (read by report commands, written by `demo`)
    #[arg(long, global = true, default_value = "patients.txt")]
    patients_file: PathBuf,

    /// Appointment file (written by `demo`)
    #[arg(long, global = true, default_value = "appointments.txt")]
    appointments_file: PathBuf,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the sample clinic, save both files and print reports
    Demo {
        /// Dates to print appointment reports for
        #[arg(
            long = "report-date",
            default_values_t = vec!["2025-08-07".to_string(), "2025-12-10".to_string()]
        )]
        report_dates: Vec<String>,
    },

    /// Load the patient file and print one patient's report
    PatientReport {
        id: u32,
    },

    /// Load the patient file and list every patient
    ListPatients,

    /// Print registry counts as JSON
    Summary {
        /// Use the seeded sample clinic instead of the patient file
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Demo { report_dates } => run_demo(&cli, report_dates),
        Command::PatientReport { id } => {
            let registry = load_registry(&cli)?;
            registry.generate_patient_report(*id)?;
            Ok(())
        }
        Command::ListPatients => {
            let registry = load_registry(&cli)?;
            for patient in registry.patients() {
                println!("{}  {}  ({})", format_id(patient.id()), patient.name(), patient.status());
            }
            Ok(())
        }
        Command::Summary { sample } => {
            let registry = if *sample {
                let mut registry = ClinicRegistry::new();
                seed_sample_clinic(&mut registry)?;
                registry
            } else {
                load_registry(&cli)?
            };
            println!("{}", registry.summary().to_json()?);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_registry(cli: &Cli) -> Result<ClinicRegistry> {
    let mut registry = ClinicRegistry::new();
    let summary = registry
        .load_from_file(&cli.patients_file)
        .with_context(|| format!("Failed to load patients from {}", cli.patients_file.display()))?;
    info!("Loaded {} patients ({} skipped)", summary.loaded, summary.skipped);
    Ok(registry)
}

fn run_demo(cli: &Cli, report_dates: &[String]) -> Result<()> {
    let mut registry = ClinicRegistry::new();
    let ids = seed_sample_clinic(&mut registry)?;

    for id in &ids.patients {
        println!("New patient registered with ID: {}", format_id(*id));
    }
    for id in &ids.doctors {
        println!("Doctor registered with ID: {}", format_id(*id));
    }
    for id in &ids.appointments {
        println!("Appointment Scheduled with ID: {}", format_id(*id));
    }

    registry
        .save_to_file(&cli.patients_file)
        .with_context(|| format!("Failed to save patients to {}", cli.patients_file.display()))?;
    registry
        .save_appointments_to_file(&cli.appointments_file)
        .with_context(|| {
            format!("Failed to save appointments to {}", cli.appointments_file.display())
        })?;

    if let Some(first) = ids.patients.first() {
        println!("\n PATIENT REPORT ");
        registry.generate_patient_report(*first)?;
    }

    for date in report_dates {
        println!("\n APPOINTMENTS ON {} ", date);
        registry.generate_appointment_report(date)?;
    }

    Ok(())
}
