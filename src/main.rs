use clap::{Parser, Subcommand};
use geoprofile_core::{
    entities::GeoPoint, proximity::ValidationOutcome, resolver::AddressResolver, usecases,
};
use geoprofile_gateways::profile_store::JsonFileProfileStore;
use std::{path::PathBuf, sync::Arc};

mod config;
mod gateways;

use config::Config;

#[derive(Parser)]
#[command(version, about = "Profile management with nearby address validation")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print address suggestions for a partial address
    Suggest { query: String },
    /// Print the position of an address
    Resolve { label: String },
    /// Print the address at a position
    Reverse {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Check if an address is within the accepted area
    Check { label: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    let gateways = gateways::geocoding_gateways(&cfg.geocoding)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg, &gateways, args.enable_cors),
        Command::Suggest { query } => {
            for candidate in gateways.resolver().suggest(&query) {
                match candidate.pos {
                    Some(pos) => println!("{}\t{}", candidate.label, pos),
                    None => println!("{}", candidate.label),
                }
            }
            Ok(())
        }
        Command::Resolve { label } => {
            let pos = gateways.resolver().resolve(&label)?;
            println!("{pos}");
            Ok(())
        }
        Command::Reverse { lat, lng } => {
            let pos = GeoPoint::try_from_lat_lng_deg(lat, lng)?;
            println!("{}", gateways.resolver().reverse_resolve(pos));
            Ok(())
        }
        Command::Check { label } => {
            let resolver: AddressResolver = gateways.resolver();
            let validator = &cfg.proximity.validator;
            match usecases::check_address(&resolver, validator, &label)? {
                ValidationOutcome::Accepted => println!("accepted"),
                ValidationOutcome::RejectedTooFar(distance) => println!(
                    "rejected: {distance} away (max. {})",
                    validator.max_distance()
                ),
                ValidationOutcome::RejectedUnresolvable => println!("rejected: unknown address"),
            }
            Ok(())
        }
    }
}

// The blocking HTTP clients of the gateways must not be dropped
// within the async runtime, so the caller keeps its own reference.
fn serve(
    cfg: Config,
    gateways: &geoprofile_webserver::Gateways,
    enable_cors: bool,
) -> anyhow::Result<()> {
    let Config {
        db,
        webserver,
        proximity,
        ..
    } = cfg;
    log::info!("Storing profiles in {}", db.profile_dir.display());
    let profiles = Arc::new(JsonFileProfileStore::try_new(&db.profile_dir)?);
    let web_cfg = geoprofile_webserver::Cfg {
        proximity: proximity.validator,
        map_zoom: proximity.map_zoom,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(geoprofile_webserver::run(
        profiles,
        gateways.clone(),
        enable_cors || webserver.enable_cors,
        web_cfg,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}
