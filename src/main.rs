mod app;
mod command;
mod config;
mod consts;
mod game;
mod render;
mod theme;
mod util;
mod vector;
use crate::app::App;
use crate::config::{Config, LogConfig};
use crate::game::{Session, Settings};
use crate::theme::Theme;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: trailsnake [options]\n",
    "\n",
    "Play snake in the terminal.\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>    Read configuration from the given file\n",
    "      --log-level <LVL>  Log at the given level (off, error, warn, info, debug, trace)\n",
    "      --seed <N>         Seed the random number generator for reproducible apples\n",
    "  -h, --help             Show this help and exit\n",
    "  -V, --version          Show the program version and exit\n",
);

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run(opts)) => {
            let (settings, theme) = match prepare(&opts) {
                Ok(prepared) => prepared,
                Err(e) => {
                    eprintln!("{}: {e:?}", consts::APP_NAME);
                    return ExitCode::FAILURE;
                }
            };
            if let Some(seed) = opts.seed {
                info!("Using RNG seed {seed}");
                let rng = StdRng::seed_from_u64(seed);
                play(App::new(Session::new_with_rng(settings, rng), theme))
            } else {
                play(App::new(Session::new(settings), theme))
            }
        }
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", consts::APP_NAME);
            eprintln!("Try '{} --help' for more information.", consts::APP_NAME);
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    log_level: Option<LevelFilter>,
    seed: Option<u64>,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-level") => opts.log_level = Some(parser.value()?.parse()?),
                Arg::Long("seed") => opts.seed = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run(opts))
    }
}

/// Load the configuration and set up everything needed before the terminal
/// is taken over
fn prepare(opts: &Options) -> anyhow::Result<(Settings, Theme)> {
    let cfg = if let Some(path) = opts.config.as_deref() {
        Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    } else {
        let path = Config::default_path()?;
        Config::load(&path, true)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
    };
    let settings = Settings::new(&cfg.field, &cfg.game).context("invalid game configuration")?;
    let theme = Theme::new(&cfg.theme).context("invalid theme configuration")?;
    if let Err(e) = init_logging(&cfg.log, opts.log_level) {
        eprintln!("{}: logging disabled: {e:#}", consts::APP_NAME);
    }
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    Ok((settings, theme))
}

fn play<R: Rng>(app: App<R>) -> ExitCode {
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn init_logging(cfg: &LogConfig, level: Option<LevelFilter>) -> anyhow::Result<()> {
    let level = level.unwrap_or(cfg.level);
    if level == LevelFilter::Off {
        return Ok(());
    }
    let path = cfg
        .file()
        .context("failed to determine path to local cache directory")?;
    let fp = open_log_file(&path)?;
    WriteLogger::init(level, simplelog::Config::default(), fp)?;
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<fs_err::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::File::create(path)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
