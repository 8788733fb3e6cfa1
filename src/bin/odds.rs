use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail};
use clap::Parser;
use rustc_hash::FxHashSet;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::StdRand;
use tracing::{debug, info};

use mulligan::data::{self, Thresholds};
use mulligan::expand::{self, Expander};
use mulligan::file::{read_json, read_text, write_json, ReadJsonFile};
use mulligan::hypergeom;
use mulligan::mc;
use mulligan::print::{self, Summary};
use mulligan::symbol::Symbol;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// deck list file (lines of the form `<count>x <name>`)
    #[clap(short = 'l', long, default_value = "list.txt")]
    list: PathBuf,

    /// card database file
    #[clap(long, default_value = "sorcery-cards.json")]
    cards: PathBuf,

    /// extracted threshold data file
    #[clap(long, default_value = "threshold-data.json")]
    threshold_data: PathBuf,

    /// air threshold of the requirement
    #[clap(short = 'a', long)]
    air: Option<u8>,

    /// earth threshold of the requirement
    #[clap(short = 'e', long)]
    earth: Option<u8>,

    /// fire threshold of the requirement
    #[clap(short = 'f', long)]
    fire: Option<u8>,

    /// water threshold of the requirement
    #[clap(short = 'w', long)]
    water: Option<u8>,

    /// estimate by Monte Carlo simulation instead of deriving the exact probability
    #[clap(short = 's', long)]
    simulate: bool,

    /// number of simulation trials
    #[clap(short = 'i', long, default_value_t = mc::DEFAULT_TRIALS)]
    iterations: u64,

    /// number of cards drawn; defaults to the requirement length
    #[clap(short = 'd', long)]
    draw_count: Option<usize>,

    /// file naming cards to treat as wildcard (aefw) sites
    #[clap(long)]
    wildcards: Option<PathBuf>,

    /// rebuild the threshold data even if present
    #[clap(long)]
    force_new: bool,

    /// persist the requirement to criteria.json for subsequent runs
    #[clap(long)]
    save: bool,

    /// saved requirement file
    #[clap(long, default_value = "criteria.json")]
    criteria: PathBuf,

    /// maximum number of states the combination search may visit
    #[clap(long, default_value_t = expand::DEFAULT_SAFETY_BOUND)]
    safety_bound: usize,
}

impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.iterations == 0 {
            bail!("at least one simulation trial is required");
        }
        if self.draw_count == Some(0) {
            bail!("draw count must be positive");
        }
        Ok(())
    }

    fn thresholds(&self) -> Option<Thresholds> {
        if [self.air, self.earth, self.fire, self.water]
            .iter()
            .all(Option::is_none)
        {
            return None;
        }
        Some(Thresholds {
            air: self.air.unwrap_or(0),
            earth: self.earth.unwrap_or(0),
            fire: self.fire.unwrap_or(0),
            water: self.water.unwrap_or(0),
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let start_time = Instant::now();
    let criteria = resolve_criteria(&args)?;
    let thresholds = ensure_threshold_data(&args)?;

    let list = read_text(&args.list)
        .map_err(|_| anyhow!("no deck list at {:?}; create one (see README)", args.list))?;
    let pool = data::deck_to_symbols(&list, &thresholds)?;
    info!("pool of {} symbols from {:?}", pool.len(), args.list);

    let draw_count = args.draw_count.unwrap_or(criteria.len());
    if !args.simulate && draw_count > criteria.len() {
        return Err(anyhow!(
            "exact derivation beyond the requirement length is unsupported; use --simulate"
        )
        .into());
    }
    let combinations = Expander::default()
        .with_safety_bound(args.safety_bound)
        .expand(&criteria, &pool, None)?;
    info!("{} satisfying combinations", combinations.len());

    let mut summary = Summary {
        criteria: expand::signature(&criteria),
        pool_size: pool.len(),
        draw_count,
        combinations: combinations.len(),
        ..Summary::default()
    };
    if args.simulate {
        info!("simulating probability over {} trials", args.iterations);
        let mut rand = StdRand::default();
        let estimate = mc::simulate(&pool, &combinations, args.iterations, draw_count, &mut rand);
        summary.simulated = Some((estimate, args.iterations));
    } else {
        info!("deriving probability");
        summary.derived = Some(hypergeom::derive_probability(&pool, &combinations));
    }
    println!("{}", Console::default().render(&print::tabulate(&summary)));
    debug!("completed in {:.3?}", start_time.elapsed());
    Ok(())
}

fn resolve_criteria(args: &Args) -> anyhow::Result<Vec<Symbol>> {
    if let Some(thresholds) = args.thresholds() {
        let criteria = thresholds.criteria();
        if criteria.is_empty() {
            bail!("requirement is empty; set at least one element threshold");
        }
        if args.save {
            info!("saving requirement to {:?}; delete when done", args.criteria);
            write_json(&args.criteria, &criteria)?;
        }
        return Ok(criteria);
    }
    match read_json::<Vec<Symbol>>(&args.criteria) {
        Ok(criteria) if !criteria.is_empty() => {
            info!("using saved requirement from {:?}", args.criteria);
            Ok(criteria)
        }
        _ => bail!("no requirement given; pass element thresholds (e.g. -a 1 -e 2)"),
    }
}

fn ensure_threshold_data(args: &Args) -> anyhow::Result<data::ThresholdMap> {
    if !args.force_new {
        if let Ok(thresholds) = read_json::<data::ThresholdMap>(&args.threshold_data) {
            return Ok(thresholds);
        }
    }
    info!("creating {:?} from {:?}", args.threshold_data, args.cards);
    let cards = Vec::<data::Card>::read_json_file(&args.cards)
        .map_err(|err| anyhow!("cannot read card database {:?}: {err}", args.cards))?;
    let wildcard_names = match &args.wildcards {
        Some(path) => Vec::<String>::read_json_file(path)?
            .iter()
            .map(|name| data::normalize_name(name))
            .collect(),
        None => FxHashSet::default(),
    };
    let thresholds = data::transform_cards(&cards, &wildcard_names);
    write_json(&args.threshold_data, &thresholds)?;
    Ok(thresholds)
}
