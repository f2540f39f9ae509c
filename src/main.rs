use clap::{Args, Parser, Subcommand};
use pokebase::{
    pokemon_from_csv_file, Appraisal, BestStat, PokeBox, PokebaseResult, Pokemon, QueryInputs,
    SortKey, StatsAppraisal,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pokebase")]
#[command(version)]
#[command(about = "Work out the IVs of Pokemon GO Pokemon from CP, HP and stardust")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every level and IV combination that fits what the game shows
    Derive(DeriveArgs),

    /// Import Pokemon from a comma-separated file into the box
    Import {
        /// CSV file: Name, Species, CP, HP, Dust Price, Powered Up?[, Level, ATK, DEF, STA]
        file: PathBuf,

        #[command(flatten)]
        pokebox: BoxArg,
    },

    /// Print the Pokemon in the box
    List {
        #[command(flatten)]
        pokebox: BoxArg,

        /// Column to sort by (name, pokédex, cp, perfection, maxCP, ...)
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Sort from highest to lowest
        #[arg(short, long)]
        descending: bool,

        /// Store a new trainer level before listing
        #[arg(long)]
        trainer_level: Option<u8>,
    },
}

#[derive(Args)]
struct BoxArg {
    /// Box file [default: <data dir>/pokebase/pokebase.json]
    #[arg(long = "box")]
    path: Option<PathBuf>,
}

impl BoxArg {
    fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_box_path)
    }
}

#[derive(Args)]
struct DeriveArgs {
    #[arg(long)]
    species: String,

    #[arg(long)]
    cp: u32,

    #[arg(long)]
    hp: u32,

    /// Stardust cost of the next power-up
    #[arg(long)]
    dust: u32,

    /// The Pokemon has been powered up at least once
    #[arg(long)]
    powered_up: bool,

    /// Overall appraisal: best, strong, decent or needsImprovement
    #[arg(long, default_value = "unknown")]
    appraisal: Appraisal,

    /// Verdict on the best stat: best, strong, good or ok
    #[arg(long, default_value = "best")]
    best_stat: BestStat,

    /// Attack is called out as a best stat
    #[arg(long)]
    atk: bool,

    /// Defense is called out as a best stat
    #[arg(long)]
    def: bool,

    /// Stamina is called out as a best stat
    #[arg(long)]
    sta: bool,
}

impl DeriveArgs {
    fn query(self) -> QueryInputs {
        let appraisal =
            StatsAppraisal::new(self.appraisal, self.best_stat, self.atk, self.def, self.sta);
        QueryInputs::new(self.species, self.cp, self.hp, self.dust, self.powered_up)
            .with_appraisal(appraisal)
    }
}

fn default_box_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pokebase")
        .join("pokebase.json")
}

fn derive(args: DeriveArgs) -> PokebaseResult<()> {
    let record = Pokemon::derive(args.query(), None)?;
    for ivs in record.candidates() {
        println!("{}", ivs);
    }
    match record.candidates().len() {
        0 => println!("No IV combination matches {} CP {} HP {}", record.species, record.cp, record.hp),
        1 => println!("{}", record),
        count => {
            let (min, max) = record.iv_percent_range();
            println!("{} possibilities, {}-{}%", count, min, max);
        }
    }
    Ok(())
}

fn import(file: PathBuf, path: PathBuf) -> PokebaseResult<()> {
    let imported = pokemon_from_csv_file(&file)?;
    let mut pokebox = PokeBox::load(&path)?;
    let count = imported.len();
    for pokemon in imported {
        pokebox.add(pokemon);
    }
    pokebox.save(&path)?;
    println!("Imported {} Pokemon into {}", count, path.display());
    Ok(())
}

fn list(
    path: PathBuf,
    sort: Option<SortKey>,
    descending: bool,
    trainer_level: Option<u8>,
) -> PokebaseResult<()> {
    let mut pokebox = PokeBox::load(&path)?;
    if let Some(trainer_level) = trainer_level {
        pokebox.set_trainer_level(trainer_level);
        pokebox.save(&path)?;
    }
    if let Some(key) = sort {
        pokebox.sort(key, !descending);
    }

    let max_level = pokebox.max_level();
    println!(
        "Trainer level {} (power-ups up to level {})",
        pokebox.trainer_level(),
        max_level
    );
    for pokemon in pokebox.iter() {
        print!("{}", pokemon);
        if let (Some(powered_up), Some(max)) =
            (pokemon.powered_up_cp(max_level), pokemon.max_cp(max_level))
        {
            print!(" | powered up CP {} | max CP {}", powered_up, max);
        }
        println!();
    }
    Ok(())
}

fn run(cli: Cli) -> PokebaseResult<()> {
    match cli.command {
        Commands::Derive(args) => derive(args),
        Commands::Import { file, pokebox } => import(file, pokebox.path()),
        Commands::List {
            pokebox,
            sort,
            descending,
            trainer_level,
        } => list(pokebox.path(), sort, descending, trainer_level),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
