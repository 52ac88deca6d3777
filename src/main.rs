//! wireup CLI - build-time service registry generator
//!
//! Usage: wireup <COMMAND>
//!
//! Commands:
//!   generate  Run every pass of a catalog and write manifests and adapters
//!   closure   Print the effective trigger attribute set

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use wireup::application::{GenerateOptions, ProcessReport, RegistryProcessor};
use wireup::config::{Config, CONFIG_FILE_NAME};
use wireup::domain::entities::RegistrationTemplate;
use wireup::domain::ports::ResourceStore;
use wireup::domain::services::ClosureResolver;
use wireup::infrastructure::{LocalResourceStore, MemoryResourceStore, TomlCatalog, TracingSink};
use wireup::QualifiedName;

/// wireup - build-time service registry generator
#[derive(Parser, Debug)]
#[command(name = "wireup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./wireup.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every pass of a catalog and write manifests and adapters
    Generate {
        /// Catalog of declared types (TOML)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Trigger attribute (overrides config)
        #[arg(long)]
        trigger: Option<String>,

        /// Output root for manifests (overrides config)
        #[arg(long)]
        class_dir: Option<PathBuf>,

        /// Output root for adapter sources (overrides config)
        #[arg(long)]
        source_dir: Option<PathBuf>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the effective trigger attribute set
    Closure {
        /// Catalog of declared types (TOML)
        #[arg(short, long)]
        catalog: PathBuf,

        /// Trigger attribute (overrides config)
        #[arg(long)]
        trigger: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, config_dir) = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            catalog,
            trigger,
            class_dir,
            source_dir,
            dry_run,
        } => {
            let mut config = config;
            if let Some(trigger) = trigger {
                config.trigger.attribute = trigger;
            }
            if let Some(dir) = class_dir {
                config.output.class_dir = dir;
            }
            if let Some(dir) = source_dir {
                config.output.source_dir = dir;
            }
            cmd_generate(&catalog, &config, &config_dir, dry_run, cli.json)
        }
        Commands::Closure { catalog, trigger } => {
            let mut config = config;
            if let Some(trigger) = trigger {
                config.trigger.attribute = trigger;
            }
            cmd_closure(&catalog, &config, cli.json)
        }
    }
}

/// Log to stderr so stdout stays clean for reports.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "wireup=warn",
        1 => "wireup=info",
        2 => "wireup=debug",
        _ => "wireup=trace",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Explicit config file, project `wireup.toml`, or the user/default fallback.
///
/// Returns the directory relative paths in the config resolve against.
fn load_config(explicit: Option<&Path>) -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;

    let project = cwd.join(CONFIG_FILE_NAME);
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None if project.is_file() => project,
        None => return Ok((Config::load_or_default(None), cwd)),
    };

    let (config, warnings) = Config::load_with_warnings(&path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or(cwd);
    Ok((config.with_env_overrides(), base))
}

fn cmd_generate(
    catalog_path: &Path,
    config: &Config,
    config_dir: &Path,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let catalog = TomlCatalog::load(catalog_path)?;
    let options = GenerateOptions::from_config(config)?;
    let template = config.registration_template(config_dir)?;

    tracing::info!(
        catalog = %catalog_path.display(),
        types = catalog.len(),
        passes = catalog.last_pass() + 1,
        "generating"
    );

    let report = if dry_run {
        let store = MemoryResourceStore::new();
        let (report, store) = run_passes(store, &catalog, options, template)?;
        if !json {
            for path in store.resources().keys() {
                println!("would write {}", path);
            }
            for name in store.sources().keys() {
                println!("would generate {}", name);
            }
        }
        report
    } else {
        let store = LocalResourceStore::new(&config.output.class_dir, &config.output.source_dir)
            .with_extension(config.registration.extension.clone());
        run_passes(store, &catalog, options, template)?.0
    };

    print_report(&report, json)
}

/// Feed every catalog pass to a fresh processor; the last one is terminal.
fn run_passes<S: ResourceStore>(
    store: S,
    catalog: &TomlCatalog,
    options: GenerateOptions,
    template: RegistrationTemplate,
) -> Result<(ProcessReport, S)> {
    let mut processor =
        RegistryProcessor::new(store, options, template).with_sink(Arc::new(TracingSink));

    let last = catalog.last_pass();
    for n in 0..=last {
        if let Some(report) = processor.process(&catalog.pass(n), n == last)? {
            return Ok((report, processor.into_store()));
        }
    }
    bail!("catalog produced no terminal pass")
}

fn print_report(report: &ProcessReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for manifest in &report.manifests {
        println!(
            "✓ {} ({} kept, {} added)",
            manifest.path, manifest.preserved, manifest.added
        );
    }
    for artifact in &report.artifacts {
        let verb = if artifact.overwritten { "updated" } else { "created" };
        println!("✓ {} {}", verb, artifact.artifact);
    }
    for failure in &report.failures {
        match &failure.implementation {
            Some(implementation) => println!(
                "✗ {} / {}: {}",
                failure.service, implementation, failure.message
            ),
            None => println!("✗ {}: {}", failure.service, failure.message),
        }
    }
    println!("{}", report.summary());
    Ok(())
}

fn cmd_closure(catalog_path: &Path, config: &Config, json: bool) -> Result<()> {
    let catalog = TomlCatalog::load(catalog_path)?;
    let trigger: QualifiedName = config.trigger_attribute()?;

    let all = catalog.all();
    let closure = ClosureResolver::new(&all, &TracingSink).resolve(&trigger);
    let members: Vec<String> = closure.members().map(|m| m.to_string()).collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "trigger": trigger.to_string(),
                "members": members,
            }))?
        );
    } else {
        for member in &members {
            println!("{}", member);
        }
    }
    Ok(())
}
