use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planetarium::cursor::collect_items;
use planetarium::{
    Container, DynamicContainer, FactoryConfig, Planet, PlanetFactory, PlanetKind,
    SequenceAdapter, StoreKind, Survey, SurveyConfig, SurveyFilter,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "planetarium", about = "Traverse planet catalogues through cursors")]
struct Cli {
    /// Log container and factory activity (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Populate a store with random planets and list them through filters.
    Survey {
        /// Store backing the catalogue.
        #[arg(long, value_enum, default_value = "fixed")]
        store: StoreArg,
        /// Number of random planets to add.
        #[arg(long, default_value_t = 6)]
        count: usize,
        /// Seed for reproducible catalogues.
        #[arg(long)]
        seed: Option<u64>,
        /// Decorator to apply; repeat to stack them (innermost first).
        #[arg(long = "filter", value_enum)]
        filters: Vec<FilterArg>,
    },
    /// Traverse a dynamic store through its own cursor and through the adapter.
    Adapt {
        /// Number of random planets to add.
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// Seed for reproducible catalogues.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StoreArg {
    Fixed,
    Dynamic,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FilterArg {
    Even,
    Odd,
    Gas,
    Terrestrial,
    Ocean,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Fixed => StoreKind::Fixed,
            StoreArg::Dynamic => StoreKind::Dynamic,
        }
    }
}

impl From<FilterArg> for SurveyFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Even => SurveyFilter::EvenMoons,
            FilterArg::Odd => SurveyFilter::OddMoons,
            FilterArg::Gas => SurveyFilter::Kind(PlanetKind::Gas),
            FilterArg::Terrestrial => SurveyFilter::Kind(PlanetKind::Terrestrial),
            FilterArg::Ocean => SurveyFilter::Kind(PlanetKind::Ocean),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Survey {
            store,
            count,
            seed,
            filters,
        } => run_survey(store.into(), count, seed, filters)?,
        Commands::Adapt { count, seed } => run_adapt(count, seed)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn factory_config(seed: Option<u64>) -> FactoryConfig {
    match seed {
        Some(seed) => FactoryConfig::default().with_seed(seed),
        None => FactoryConfig::default(),
    }
}

fn run_survey(
    store: StoreKind,
    count: usize,
    seed: Option<u64>,
    filters: Vec<FilterArg>,
) -> Result<()> {
    let config = SurveyConfig {
        store,
        count,
        filters: filters.into_iter().map(SurveyFilter::from).collect(),
        factory: factory_config(seed),
    };
    let report = Survey::new(config).run().context("survey failed")?;

    println!(
        "stored {} of {} planets ({} dropped)",
        report.stored,
        report.requested,
        report.dropped()
    );
    if report.matches.is_empty() {
        println!("No planets matched the filters.");
    }
    for planet in &report.matches {
        print_planet(planet);
    }

    Ok(())
}

fn run_adapt(count: usize, seed: Option<u64>) -> Result<()> {
    let mut factory =
        PlanetFactory::new(factory_config(seed)).context("failed to initialize planet factory")?;
    let mut catalogue = DynamicContainer::with_capacity(count);
    factory.populate(&mut catalogue, count);

    println!("Base cursor:");
    for planet in collect_items(&mut catalogue.cursor()) {
        print_planet(planet);
    }

    println!("Sequence adapter:");
    for planet in collect_items(&mut SequenceAdapter::new(catalogue.as_slice())) {
        print_planet(planet);
    }

    Ok(())
}

fn print_planet(planet: &Planet) {
    println!("{}\tkind={}", planet.describe().replace('\n', "\t"), planet.kind());
}
