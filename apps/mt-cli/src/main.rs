use clap::{Parser, Subcommand};
use mt_config::{ConfigResult, Session};
use mt_phase::PhaseState;
use mt_transport::{
    DiffusionBasis, DiffusionCoefficientProvider, MixtureTransport, lewis_numbers,
    thermal_diffusivity,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mt-cli")]
#[command(about = "mixtrans CLI - mixture transport coefficients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
    },
    /// Print the active transport model label
    Model {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
    },
    /// Print bulk mixture and transport properties
    Properties {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
    },
    /// Print species diffusion coefficients
    Diffusion {
        /// Path to the configuration file (YAML or JSON)
        config_path: PathBuf,
        /// Flux basis: mix (mole-fraction gradient), mass, or mole
        #[arg(short, long, default_value = "mix")]
        basis: DiffusionBasis,
    },
}

fn main() -> ConfigResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Model { config_path } => cmd_model(&config_path),
        Commands::Properties { config_path } => cmd_properties(&config_path),
        Commands::Diffusion { config_path, basis } => cmd_diffusion(&config_path, basis),
    }
}

fn open_session(config_path: &Path) -> ConfigResult<Session> {
    debug!(path = %config_path.display(), "loading configuration");
    let config = mt_config::load(config_path)?;
    mt_config::build_session(&config)
}

fn cmd_validate(config_path: &Path) -> ConfigResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = mt_config::load(config_path)?;
    mt_config::validate_config(&config)?;
    println!("✓ Configuration is valid");
    Ok(())
}

fn cmd_model(config_path: &Path) -> ConfigResult<()> {
    let session = open_session(config_path)?;
    println!("{}", session.transport.transport_model());
    Ok(())
}

fn cmd_properties(config_path: &Path) -> ConfigResult<()> {
    let session = open_session(config_path)?;
    let phase = session.phase.as_ref();
    let transport = session.transport.as_ref();

    let lambda = transport.thermal_conductivity(phase)?;
    let mu = transport.viscosity(phase)?;
    let alpha = thermal_diffusivity(phase, lambda)?;

    println!("{} [{}]", session.name, transport.transport_model());
    println!("  phase:                {}", phase.name());
    println!("  temperature:          {:.2} K", phase.temperature().value);
    println!("  pressure:             {:.1} Pa", phase.pressure().value);
    println!("  density:              {:.5} kg/m³", phase.density().value);
    println!("  cp:                   {:.2} J/(kg·K)", phase.cp_mass().value);
    println!("  mean molar mass:      {:.4} kg/kmol", phase.mean_molar_mass());
    println!("  viscosity:            {:.4e} Pa·s", mu.value);
    println!("  thermal conductivity: {:.5} W/(m·K)", lambda.value);
    println!("  thermal diffusivity:  {:.4e} m²/s", alpha);

    let mut le = vec![0.0; phase.n_species()];
    lewis_numbers(phase, transport, &mut le)?;
    println!("  Lewis numbers:");
    for (species, le) in phase.species().iter().zip(&le) {
        println!("    {:<4} {:.4}", species.key(), le);
    }
    Ok(())
}

fn cmd_diffusion(config_path: &Path, basis: DiffusionBasis) -> ConfigResult<()> {
    let session = open_session(config_path)?;
    let phase = session.phase.as_ref();

    let mut d = vec![0.0; phase.n_species()];
    basis.coefficients(session.transport.as_ref(), phase, &mut d)?;

    println!(
        "{} [{}] basis={}",
        session.name,
        session.transport.transport_model(),
        basis.label()
    );
    for (species, d) in phase.species().iter().zip(&d) {
        println!("  {:<4} {:.6e} m²/s", species.key(), d);
    }
    Ok(())
}
