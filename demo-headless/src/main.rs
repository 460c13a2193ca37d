use clap::Parser;
use nfdrs_core::{
    calculate_fire_danger_with_live_moisture, Percent, WeatherObservation,
    DEFAULT_LIVE_FUEL_MOISTURE,
};
use tracing_subscriber::EnvFilter;

/// Fire danger rating demo with configurable weather inputs
#[derive(Parser, Debug)]
#[command(name = "nfdrs-demo")]
#[command(about = "NFDRS fire danger rating demo", long_about = None)]
struct Args {
    /// Temperature in °F
    #[arg(short, long, default_value_t = 85.0)]
    temperature: f64,

    /// Relative humidity in %
    #[arg(long, default_value_t = 25.0)]
    humidity: f64,

    /// Wind speed in mph
    #[arg(short, long, default_value_t = 12.0)]
    wind_speed: f64,

    /// 24-hour precipitation in inches
    #[arg(short, long, default_value_t = 0.0)]
    precipitation: f64,

    /// Live fuel moisture in % (default matches the no-field-data assumption)
    #[arg(long)]
    live_moisture: Option<f64>,

    /// Emit the result as JSON instead of a report
    #[arg(short, long)]
    json: bool,
}

fn main() {
    // RUST_LOG surfaces the library's per-calculation debug events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let observation = WeatherObservation::from_raw(
        args.temperature,
        args.humidity,
        args.wind_speed,
        args.precipitation,
    );
    let live_moisture = args
        .live_moisture
        .map_or(DEFAULT_LIVE_FUEL_MOISTURE, Percent::new);

    let result = match calculate_fire_danger_with_live_moisture(&observation, live_moisture) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("invalid observation: {err}");
            std::process::exit(1);
        }
    };

    if args.json {
        // Serialization of a plain value struct cannot fail
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
        return;
    }

    println!("=== NFDRS Fire Danger Rating ===");
    println!(
        "Weather: {} / {} RH / {} wind / {} rain",
        observation.temperature,
        observation.relative_humidity,
        observation.wind_speed,
        observation.precipitation_24h
    );
    println!();
    println!("Dead fuel moisture (1-hr): {}", result.dead_fuel_moisture_1hr);
    println!("Live fuel moisture:        {}", result.live_fuel_moisture);
    println!("Spread component:          {:.1}", result.spread_component);
    println!(
        "Energy release component:  {:.1}",
        result.energy_release_component
    );
    println!("Burning index:             {:.1}", result.burning_index);
    println!();
    println!("Fire danger class: {}", result.danger_class);
}
