//! vitae CLI: Command-line interface for the experience timeline

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitae_core::{Config, ResumeData, DEFAULT_CONFIG_PATH, DEFAULT_DATA_FILE};
use vitae_tui::headless::render_frame;
use vitae_tui::{Action, App};

/// Experience timeline for the terminal
#[derive(Parser, Debug)]
#[command(name = "vitae")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    show: ShowArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Resume data file
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Display config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write logs to this file while the TUI is open
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Show(ShowArgs),

    /// Print a single frame as plain text
    Render {
        /// Resume data file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Display config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Frame width in cells
        #[arg(long, default_value = "80")]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value = "24")]
        height: u16,

        /// Render the loading placeholders instead of the data
        #[arg(long)]
        loading: bool,

        /// Expand the Nth entry (1-based)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        expand: Option<u16>,

        /// Use ASCII icons
        #[arg(long)]
        ascii: bool,
    },

    /// Write a sample data file
    Init {
        /// Where to write the file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the records
    List {
        /// Resume data file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        None => cmd_show(&cli.show, cli.verbose),
        Some(Commands::Show(args)) => cmd_show(&args, cli.verbose),
        Some(Commands::Render {
            data,
            config,
            width,
            height,
            loading,
            expand,
            ascii,
        }) => {
            init_stderr_logging(cli.verbose);
            let options = RenderOptions {
                width,
                height,
                loading,
                expand,
                ascii,
            };
            cmd_render(&data, &config, &options)
        }
        Some(Commands::Init { data, force }) => {
            init_stderr_logging(cli.verbose);
            cmd_init(&data, force)
        }
        Some(Commands::List { data, json }) => {
            init_stderr_logging(cli.verbose);
            cmd_list(&data, json)
        }
    }
}

fn log_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "vitae=debug" } else { "vitae=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr for the one-shot commands.
fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Log to a file while the TUI owns the terminal.
fn init_file_logging(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    Ok(Config::load_or_default(path)?.with_no_color(no_color))
}

fn cmd_show(args: &ShowArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    // Without a log file, logging stays off so it cannot corrupt the screen
    if let Some(log_file) = &args.log_file {
        init_file_logging(log_file, verbose)?;
    }

    let config = load_config(&args.config)?;
    debug!(?config, "loaded config");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(vitae_tui::run_tui(&args.data, &config))
}

struct RenderOptions {
    width: u16,
    height: u16,
    loading: bool,
    expand: Option<u16>,
    ascii: bool,
}

fn cmd_render(data: &Path, config: &Path, options: &RenderOptions) -> Result<(), Box<dyn Error>> {
    let config = load_config(config)?.with_no_color(options.ascii);

    let mut app = if options.loading {
        let mut app = App::with_experiences(Vec::new(), &config);
        app.card.set_loading(true);
        app
    } else {
        let resume = ResumeData::load(data)?;
        App::with_experiences(resume.experiences, &config)
    };

    if let Some(n) = options.expand {
        app.handle_action(Action::Toggle(usize::from(n) - 1));
    }

    println!("{}", render_frame(&app, options.width, options.height)?);
    Ok(())
}

fn cmd_init(data: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    let resume = ResumeData::write_sample(data, force)?;
    println!(
        "Created {} with {} sample entries",
        data.display(),
        resume.len()
    );
    Ok(())
}

fn cmd_list(data: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let resume = ResumeData::load(data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resume)?);
        return Ok(());
    }

    if resume.is_empty() {
        println!("No experiences in {}", data.display());
        return Ok(());
    }

    for (i, exp) in resume.experiences.iter().enumerate() {
        println!("{}. {}  {}", i + 1, exp.time_label(), exp.position);
        match exp.link() {
            Some(link) => println!("   {} ({link})", exp.company),
            None => println!("   {}", exp.company),
        }
        for project in exp.projects() {
            println!("   - {project}");
        }
    }

    println!("\n{} experience(s)", resume.len());
    Ok(())
}
