//! Geo location generator CLI
//!
//! Terminal host for the geo location form: builds `geo:` URIs, fills the
//! form from maps links and validates single coordinates.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use application::{
    ApplicationError, FormCommand, FormEvent, FormField, GeoLocationForm, GeoLocationGenerator,
    GeneratorSource,
};
use clap::{Parser, Subcommand};
use domain::MapLinkFields;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, LogFormat, OutputFormat};

/// Geo location generator CLI
#[derive(Debug, Parser)]
#[command(name = "geo-generator-cli")]
#[command(author, version, about = "Build geo: URIs for QR codes", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "GEO_GENERATOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a geo URI from coordinates and an optional query
    ///
    /// With a query, missing coordinates default to 0.
    /// Example: geo-generator-cli build --lat 40.7 --lon -74.0 --query "coffee & tea"
    Build {
        /// Latitude in degrees, [-90, 90]
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        lat: String,

        /// Longitude in degrees, [-180, 180]
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        lon: String,

        /// Free-form query text
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Extract latitude, longitude and query from a maps link
    ///
    /// Links that are not maps links yield empty fields.
    /// Example: geo-generator-cli fill --generate "http://maps.google.com/?ie=UTF8&ll=1,2&z=18"
    Fill {
        /// The pasted maps link
        link: String,

        /// Also build the geo URI from the extracted fields
        #[arg(short, long)]
        generate: bool,
    },

    /// Validate a single form field
    ///
    /// Example: geo-generator-cli validate lat -- -91.5
    Validate {
        /// Field name: lat, lon, query or link
        field: FormField,

        /// Field value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Determine log filter from verbosity count, falling back to the config
fn log_filter_from_verbosity(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the tracing subscriber, writing to stderr
fn init_logging(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Execute one subcommand and render its result
fn run(command: Commands, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Commands::Build { lat, lon, query } => {
            let mut generator =
                GeoLocationGenerator::with_form(GeoLocationForm::new(lat, lon, query));
            info!(generator = generator.name(), "Building geo URI");

            let uri = generator.generate()?;
            Ok(output::render_uri(&uri, format)?)
        },

        Commands::Fill { link, generate } => {
            let mut generator = GeoLocationGenerator::new();
            let fields = match generator.handle(FormCommand::FillFromMapsLink(link))? {
                FormEvent::Filled(fields) => fields,
                _ => {
                    warn!("Not a maps link, nothing extracted");
                    MapLinkFields::default()
                },
            };

            let uri = if generate {
                Some(generator.generate()?)
            } else {
                None
            };
            Ok(output::render_fields(&fields, uri.as_ref(), format)?)
        },

        Commands::Validate { field, value } => {
            debug!(%field, %value, "Validating field");
            let mut generator = GeoLocationGenerator::new();
            generator.handle(FormCommand::Edit {
                field,
                value: value.clone(),
            })?;

            match generator.check_field(field)? {
                Some(coordinate) => Ok(output::render_coordinate(&coordinate, format)?),
                None => Ok(output::render_text(
                    &field.label().to_lowercase(),
                    &value,
                    format,
                )?),
            }
        },
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;

    // Set up logging based on verbosity
    init_logging(
        log_filter_from_verbosity(cli.verbose, &config.log_level),
        config.log_format,
    );
    debug!(?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.output);

    match run(cli.command, format) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => match err.downcast_ref::<ApplicationError>() {
            Some(ApplicationError::Domain(domain_err)) => {
                eprintln!("error: {}", domain_err.message());
                Ok(ExitCode::FAILURE)
            },
            _ => Err(err),
        },
    }
}
