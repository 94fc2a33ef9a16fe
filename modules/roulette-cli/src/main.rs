//! Command-line front end: pick a random business for a search term.

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roulette_core::{
    parse_request, LengthUnit, PriceLevel, RandomSampler, SearchRequest, UnitError, YelpClient,
    DEFAULT_MAX_SAMPLE_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "yelp-roulette")]
#[command(about = "Randomly select a restaurant from the Yelp API")]
#[command(version)]
struct Cli {
    /// Search term (or a whole free-text message with --parse)
    query: String,

    /// Yelp Developer API access token
    #[arg(short = 't', long, env = "YELP_ROULETTE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Location to base search results off of
    #[arg(short, long, default_value = "Santa Barbara, CA")]
    location: String,

    /// Only include businesses that are open now
    #[arg(long)]
    open_now: bool,

    /// Price levels to include, repeatable: 1-4 or $-$$$$
    #[arg(short, long)]
    price: Vec<PriceLevel>,

    /// Maximum sample size for random business selection
    #[arg(short, long, default_value_t = DEFAULT_MAX_SAMPLE_SIZE, value_parser = parse_sample_size)]
    max_sample_size: usize,

    /// Limit search results to the given radius
    #[arg(short, long, default_value_t = 20.0, value_parser = parse_radius)]
    within: f64,

    /// Units for --within: miles, kilometers or meters
    #[arg(short = 'U', long, default_value = "miles", value_parser = parse_unit)]
    within_unit: LengthUnit,

    /// Interpret QUERY as a free-text message ("tacos in Austin, TX $ open within 5mi").
    /// Flags fill in whatever the message leaves out.
    #[arg(long)]
    parse: bool,
}

fn parse_sample_size(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("expected a positive integer, got {raw:?}")),
    }
}

fn parse_radius(raw: &str) -> std::result::Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("expected a non-negative distance, got {raw:?}")),
    }
}

fn parse_unit(raw: &str) -> std::result::Result<LengthUnit, UnitError> {
    raw.to_lowercase().parse()
}

impl Cli {
    fn flag_radius_meters(&self) -> u32 {
        (self.within * self.within_unit.meters()) as u32
    }

    fn build_request(&self) -> Result<SearchRequest> {
        let mut request = if self.parse {
            let mut parsed = parse_request(&self.query)?;
            if parsed.location.is_empty() {
                parsed.location = self.location.clone();
            }
            if parsed.radius_meters == 0 {
                parsed.radius_meters = self.flag_radius_meters();
            }
            parsed.open_now |= self.open_now;
            let mut price_levels = self.price.clone();
            price_levels.append(&mut parsed.price_levels);
            parsed.price_levels = price_levels;
            parsed
        } else {
            SearchRequest {
                term: self.query.clone(),
                location: self.location.clone(),
                open_now: self.open_now,
                price_levels: self.price.clone(),
                radius_meters: self.flag_radius_meters(),
                ..Default::default()
            }
        };
        request.max_sample_size = self.max_sample_size;
        Ok(request)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("roulette=info".parse()?)
                .add_directive("yelp_client=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = cli.build_request()?;
    info!(
        term = request.term.as_str(),
        location = request.location.as_str(),
        radius_meters = request.radius_meters,
        max_sample_size = request.max_sample_size,
        "Searching for a random business"
    );

    let sampler = RandomSampler::from_os_rng(YelpClient::new(cli.access_token.clone()));

    let business = tokio::select! {
        result = sampler.random_business(&request) => result?,
        _ = tokio::signal::ctrl_c() => bail!("search cancelled"),
    };

    println!("{} - {}\n{}", business.name, business.price, business.url);
    Ok(())
}
