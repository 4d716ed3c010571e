//! Command handlers

use fleet_app::{Config, FleetSession};
use fleet_domain::NewVehicle;
use fleet_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::{output_fleet, output_manager, output_vehicle};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref file) = cli.file {
        config.data_file = Some(file.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Config {
            show,
            set_company,
            set_file,
            set_output,
            set_dark_theme,
            reset,
        } => cmd_config(show, set_company, set_file, set_output, set_dark_theme, reset),
        command => {
            let alert = |msg: &str| eprintln!("{}", msg);
            let mut session = FleetSession::open(config, &alert)?;
            debug!(path = %session.data_file().display(), "using fleet file");
            run_fleet_command(command, &mut session, output_format)
        }
    }
}

fn run_fleet_command(
    command: Commands,
    session: &mut FleetSession,
    output_format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::List { available } => {
            let vehicles: Vec<_> = session
                .store()
                .sorted_by_brand()
                .into_iter()
                .filter(|v| !available || v.available)
                .collect();
            output_fleet(output_format, session.store(), &vehicles)
        }
        Commands::Show { code } => {
            let vehicle = session
                .store()
                .get(&code)
                .ok_or(Error::VehicleNotFound(code))?;
            output_vehicle(output_format, vehicle)
        }
        Commands::Add {
            brand,
            model,
            year,
            seats,
        } => {
            let year = NewVehicle::parse_year(&year)?;
            let vehicle = session.add(NewVehicle::new(brand, model, year, seats))?;
            session.save()?;
            if output_format == OutputFormat::Table {
                println!("Added to {}", session.data_file().display());
            }
            output_vehicle(output_format, &vehicle)
        }
        Commands::Manager { set } => {
            if let Some(name) = set {
                session.set_manager(name);
                // Persist only the manager, not per-invocation overrides
                let mut stored = Config::load()?;
                stored.manager = session.config().manager.clone();
                stored.save()?;
            }
            output_manager(output_format, session.store())
        }
        // Handled in execute before a session is opened
        Commands::Config { .. } => Ok(()),
    }
}

fn cmd_config(
    show: bool,
    set_company: Option<String>,
    set_file: Option<std::path::PathBuf>,
    set_output: Option<OutputFormat>,
    set_dark_theme: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    // Re-read without CLI overrides so --file isn't persisted by accident
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(company) = set_company {
        config.company_name = company;
        changed = true;
    }
    if let Some(file) = set_file {
        config.data_file = Some(file);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(dark) = set_dark_theme {
        config.dark_theme = dark;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
