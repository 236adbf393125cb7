use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;
use waygraph::{helpers, Coordinate, EngineConfig, VehicleProfile};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = env!("CARGO_PKG_DESCRIPTION"))]
struct Args {
    /// Sets the logging level. The env-variable RUST_LOG has precedence.
    #[arg(long, short = 'l', default_value = "INFO")]
    log: String,

    /// Optional YAML file overriding the engine's defaults (Overpass endpoint, timeout, etc.).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    origin_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    origin_lon: f64,
    #[arg(long, allow_hyphen_values = true)]
    dest_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    dest_lon: f64,

    #[arg(long, value_enum, default_value = "car")]
    vehicle: VehicleKind,
    /// Truck height in meters, only meaningful with --vehicle truck.
    #[arg(long)]
    height: Option<f64>,
    /// Truck weight in tonnes, only meaningful with --vehicle truck.
    #[arg(long)]
    weight: Option<f64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
}

fn main() {
    let args = Args::parse();
    if let Err(msg) = helpers::init_logging(&args.log, vec![]) {
        eprintln!("{}", msg);
        std::process::exit(1);
    }

    info!("EXECUTE {}", env!("CARGO_PKG_NAME"));

    let cfg = match &args.config {
        Some(path) => match EngineConfig::try_from_yaml(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Failed to load config from {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let origin = Coordinate::new(args.origin_lat, args.origin_lon);
    let destination = Coordinate::new(args.dest_lat, args.dest_lon);
    if !origin.is_valid() || !destination.is_valid() {
        eprintln!("Origin/destination coordinates are out of range.");
        std::process::exit(1);
    }

    let vehicle = match args.vehicle {
        VehicleKind::Car => VehicleProfile::Car,
        VehicleKind::Motorcycle => VehicleProfile::Motorcycle,
        VehicleKind::Truck => VehicleProfile::Truck {
            height_m: args.height,
            weight_t: args.weight,
        },
    };

    let now = Instant::now();
    match waygraph::plan(&cfg, origin, destination, &vehicle) {
        Ok(response) => {
            info!(
                "Computed {} route(s) in {} ms",
                response.routes.len(),
                now.elapsed().as_millis()
            );
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("Failed to serialize response: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
