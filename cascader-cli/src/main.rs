mod paths;
mod script;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use cascader::option::from_json_file;
use cascader::{
    Cascader, CascaderConfig, CascaderError, LABEL_SEPARATOR, OptionId, TextRenderer,
};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use script::{Event, parse_ids};

#[derive(Parser)]
#[command(
    name = "cascader",
    version,
    about = "Replay selection events against a cascading selector"
)]
struct Cli {
    /// JSON file with the option tree
    #[arg(short, long)]
    options: PathBuf,

    /// JSON file with cascader settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial value, comma-separated ids
    #[arg(long)]
    value: Option<String>,

    /// Emit partial selections as well
    #[arg(long)]
    change_on_select: bool,

    /// Text shown when nothing is selected
    #[arg(long)]
    placeholder: Option<String>,

    /// Tab title per level, in order
    #[arg(long = "tab-title")]
    tab_titles: Vec<String>,

    /// Log level written to the log file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Events: open, close, toggle, reset, tab:L, select:L:ID, value:IDS
    events: Vec<Event>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Cascader(#[from] CascaderError),

    #[error("Invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn init_logging(level: LevelFilter) {
    let Some(path) = paths::log_file() else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(level, Config::default(), file).is_err() {
                eprintln!("Logger already initialized");
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

fn load_config(cli: &Cli) -> Result<CascaderConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&contents).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => CascaderConfig::default(),
    };

    if cli.change_on_select {
        config = config.with_change_on_select(true);
    }
    if let Some(placeholder) = &cli.placeholder {
        config = config.with_placeholder(placeholder.clone());
    }
    if !cli.tab_titles.is_empty() {
        config = config.with_tab_titles(cli.tab_titles.iter().cloned());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = from_json_file::<OptionId>(&cli.options)?;
    let config = load_config(&cli)?;
    let value = cli.value.as_deref().map(parse_ids).unwrap_or_default();

    log::info!(
        "starting with {} root option(s), {} event(s)",
        options.len(),
        cli.events.len()
    );

    let mut cascader = Cascader::new(options, TextRenderer::new())
        .with_config(config)
        .with_value(&value)
        .on_change(|labels| {
            let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
            println!("change: {}", names.join(LABEL_SEPARATOR));
        });

    println!("{}", cascader.renderer().frame());

    for event in &cli.events {
        println!("\n$ {}", event);
        match event {
            Event::Open => cascader.open(),
            Event::Close => cascader.close(),
            Event::Toggle => cascader.toggle(),
            Event::Reset => cascader.reset(),
            Event::Value(ids) => cascader.set_value(ids),
            Event::Tab(level) => {
                if let Err(e) = cascader.change_tab(*level) {
                    println!("ignored: {}", e);
                }
            }
            Event::Select(level, id) => {
                if cascader.select(*level, id).is_none() {
                    println!("ignored: {} is not on level {}", id, level);
                }
            }
        }
        println!("{}", cascader.renderer().frame());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
