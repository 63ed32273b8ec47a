// hireboard - interview outcomes joined with the new-employee roster

mod exit_codes;
mod export;
mod pipeline;
mod present;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use hireboard_config::{ConfigError, ConfigSource, DashboardConfig, LOCAL_CONFIG_FILE};
use hireboard_merge::MergeError;
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_ERROR, EXIT_MISSING_COLUMN, EXIT_OUTPUT, EXIT_SUCCESS, EXIT_USAGE};
use export::PassedFormat;
use pipeline::Dashboard;
use present::{HtmlPresenter, TextPresenter};

#[derive(Parser)]
#[command(name = "hireboard")]
#[command(about = "Hiring dashboard: daily interview reports joined with the new-employee roster")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./hireboard.toml, then the user config file)
    #[arg(long, global = true, env = "HIREBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Directory of daily report files (overrides config)
    #[arg(long, global = true)]
    reports: Option<PathBuf>,

    /// New-employee roster spreadsheet (overrides config)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins if set.
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress warnings and progress messages
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML dashboard
    #[command(after_help = "\
The page shows every daily report row and every roster row in collapsible
sections, followed by the candidates who passed the interview. Files that
cannot be read are listed at the top; the rest of the page still renders.

Examples:
  hireboard render
  hireboard render -o /srv/www/hiring.html
  hireboard render --reports reports/june --roster hr/roster.xlsx -o -")]
    Render {
        /// Output file, or - for stdout (default: display.html_output from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the dashboard as text tables
    #[command(after_help = "\
Examples:
  hireboard show
  hireboard show --reports reports/june | less -S")]
    Show,

    /// Print only the candidates who passed the interview
    #[command(after_help = "\
Formats:
  table  aligned text (default)
  json   array of objects, join dates as yyyy-mm-dd, missing values null
  csv    header row plus one line per candidate, join dates as dd-Mon-yyyy

Examples:
  hireboard passed
  hireboard passed --format json | jq '.[].\"Employee Name\"'
  hireboard passed --format csv -o passed.csv")]
    Passed {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = PassedFormat::Table)]
        format: PassedFormat,

        /// Output file, or - for stdout
        #[arg(long, short = 'o', default_value = "-")]
        output: PathBuf,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a config file with every setting at its default
    #[command(after_help = "\
Examples:
  hireboard config init
  hireboard config init ~/.config/hireboard/config.toml")]
    Init {
        /// Where to write (default: ./hireboard.toml)
        path: Option<PathBuf>,
    },

    /// Print which config file is in effect
    Path,

    /// Print the effective configuration as TOML
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: hireboard <command> [options]");
            eprintln!("       hireboard --help for more information");
            Ok(())
        }
        Some(Commands::Config(ConfigCommands::Init { path })) => cmd_config_init(path.as_deref(), cli.quiet),
        Some(Commands::Config(ConfigCommands::Path)) => cmd_config_path(&cli),
        Some(Commands::Config(ConfigCommands::Show)) => load_config(&cli).and_then(|config| cmd_config_show(&config)),
        Some(Commands::Render { output }) => {
            load_config(&cli).and_then(|config| cmd_render(&config, output.as_deref(), cli.quiet))
        }
        Some(Commands::Show) => load_config(&cli).and_then(|config| cmd_show(&config)),
        Some(Commands::Passed { format, output }) => {
            load_config(&cli).and_then(|config| cmd_passed(&config, *format, output, cli.quiet))
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self { code: EXIT_OUTPUT, message: msg.into(), hint: None }
    }

    pub fn config(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::Parse(_) => Some("run `hireboard config init <path>` to see every setting with its default".to_string()),
            ConfigError::Write { .. } => Some("remove the existing file or pick another path".to_string()),
            ConfigError::Read { .. } => None,
        };
        Self { code: EXIT_USAGE, message: err.to_string(), hint }
    }

    pub fn merge(err: MergeError) -> Self {
        match err {
            MergeError::MissingColumn { .. } => Self {
                code: EXIT_MISSING_COLUMN,
                message: err.to_string(),
                hint: Some("check the header row, or map the column name under [columns] in hireboard.toml".to_string()),
            },
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<MergeError> for CliError {
    fn from(err: MergeError) -> Self {
        Self::merge(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::config(err)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn load_config(cli: &Cli) -> Result<DashboardConfig, CliError> {
    let (mut config, source) = DashboardConfig::load(cli.config.as_deref())?;
    tracing::info!(source = %source, "configuration loaded");

    if let Some(dir) = &cli.reports {
        config.inputs.reports_dir = dir.clone();
    }
    if let Some(file) = &cli.roster {
        config.inputs.roster_file = file.clone();
    }
    Ok(config)
}

fn cmd_config_init(path: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let path = path.unwrap_or(Path::new(LOCAL_CONFIG_FILE));
    DashboardConfig::write_default(path)?;
    if !quiet {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_config_path(cli: &Cli) -> Result<(), CliError> {
    let (_, source) = DashboardConfig::load(cli.config.as_deref())?;
    match source {
        ConfigSource::File(path) => println!("{}", path.display()),
        ConfigSource::Defaults => {
            println!("{}", ConfigSource::Defaults);
            if !cli.quiet {
                eprintln!(
                    "no config file found; looked for ./{} and {}",
                    LOCAL_CONFIG_FILE,
                    DashboardConfig::user_config_path().display()
                );
            }
        }
    }
    Ok(())
}

fn cmd_config_show(config: &DashboardConfig) -> Result<(), CliError> {
    let body = config.to_toml()?;
    write_output(Path::new("-"), &body)
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Load and join. File read failures and truncated sheets go to stderr
/// unless `quiet`; they are also carried on the dashboard itself. Both are
/// printed before the join so a missing-column error follows its cause.
fn prepare(config: &DashboardConfig, quiet: bool) -> Result<Dashboard, CliError> {
    let inputs = pipeline::load_inputs(config);
    if !quiet {
        for failure in inputs.failures() {
            eprintln!("warning: {failure}");
        }
        for warning in inputs.warnings() {
            eprintln!("warning: {warning}");
        }
    }
    let dashboard = pipeline::build_dashboard(config, inputs)?;
    if !quiet {
        for dup in &dashboard.duplicates {
            eprintln!("warning: {}", pipeline::duplicate_message(dup));
        }
    }
    Ok(dashboard)
}

fn cmd_render(config: &DashboardConfig, output: Option<&Path>, quiet: bool) -> Result<(), CliError> {
    let dashboard = prepare(config, quiet)?;

    let mut presenter = HtmlPresenter::new();
    pipeline::render(&dashboard, &config.display, &mut presenter);

    let output = output.unwrap_or(config.display.html_output.as_path());
    write_output(output, &presenter.finish())?;

    if !quiet && !is_stdout(output) {
        eprintln!(
            "wrote {} ({} passed, {} not on the roster)",
            output.display(),
            dashboard.summary.passed,
            dashboard.summary.unmatched
        );
    }
    Ok(())
}

fn cmd_show(config: &DashboardConfig) -> Result<(), CliError> {
    // Failures and duplicates are part of the printed dashboard.
    let dashboard = prepare(config, true)?;

    let mut presenter = TextPresenter::new();
    pipeline::render(&dashboard, &config.display, &mut presenter);
    write_output(Path::new("-"), &presenter.finish())
}

fn cmd_passed(config: &DashboardConfig, format: PassedFormat, output: &Path, quiet: bool) -> Result<(), CliError> {
    let dashboard = prepare(config, quiet)?;

    let mut buf = Vec::new();
    export::write_passed(
        &mut buf,
        &dashboard.passed,
        &config.columns,
        format,
        &config.display.empty_message,
    )
    .map_err(|e| CliError::output(format!("cannot format output: {e}")))?;

    let body = String::from_utf8(buf).map_err(|e| CliError::general(e.to_string()))?;
    write_output(output, &body)
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Write to `path`, or stdout for `-`.
fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    if is_stdout(path) {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(contents.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| CliError::output(format!("cannot write to stdout: {e}")));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(CliError::output(format!("cannot write {}: directory does not exist", path.display()))
                .with_hint(format!("create {} first", parent.display())));
        }
    }
    fs::write(path, contents).map_err(|e| CliError::output(format!("cannot write {}: {e}", path.display())))
}
