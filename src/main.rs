use anyhow::{Context, Result};
use clap::Parser;
use precinct::{Dialect, FileOptions, builtins, config};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Print the modules each file depends on, as JSON.
#[derive(Debug, Parser)]
#[command(name = "precinct", version)]
struct Cli {
    /// Files to scan.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Dialect of the content (commonjs, amd, es6, sass, stylus, less);
    /// skips extension hints and detection.
    #[arg(short = 't', long = "type")]
    dialect: Option<String>,

    /// Drop runtime built-in modules from the output.
    #[arg(long)]
    no_core: bool,

    #[arg(long)]
    amd_skip_lazy_loaded: bool,

    #[arg(long)]
    es6_mixed_imports: bool,

    #[arg(long)]
    es6_skip_async_imports: bool,

    /// JSON options file; replaces PRECINCT_* environment settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // A missing .env is fine; PRECINCT_* may come from the real environment.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,precinct=info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let options = resolve_options(&cli)?;
    let dialect = explicit_dialect(&cli, &options);

    let report = scan_all(&cli.files, dialect, &options);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// `--type` first, then a configured `type`; with neither, the file
/// extension and detection decide.
fn explicit_dialect(cli: &Cli, options: &FileOptions) -> Option<Dialect> {
    cli.dialect
        .as_deref()
        .map(Dialect::from)
        .or(options.extract.dialect)
}

/// Scan every file; one that cannot be read or parsed is logged and left out.
fn scan_all(
    files: &[PathBuf],
    dialect: Option<Dialect>,
    options: &FileOptions,
) -> serde_json::Map<String, serde_json::Value> {
    let mut report = serde_json::Map::new();
    for file in files {
        let scanned = match dialect {
            Some(d) => scan_as(file, d, options),
            None => precinct::from_file(file, options)
                .with_context(|| format!("failed to scan {}", file.display())),
        };
        match scanned {
            Ok(deps) => {
                tracing::info!("{}: {} dependencies", file.display(), deps.len());
                report.insert(file.display().to_string(), deps.into());
            }
            Err(err) => tracing::warn!("skipping {}: {err:#}", file.display()),
        }
    }
    report
}

/// Config file or environment first, then command-line flags on top.
fn resolve_options(cli: &Cli) -> Result<FileOptions> {
    let mut options = match &cli.config {
        Some(path) => config::load_from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => config::load_from_env_or_default()?,
    };
    if cli.no_core {
        options.include_core = false;
    }
    options.extract.amd.skip_lazy_loaded |= cli.amd_skip_lazy_loaded;
    options.extract.es6.mixed_imports |= cli.es6_mixed_imports;
    options.extract.es6.skip_async_imports |= cli.es6_skip_async_imports;
    Ok(options)
}

/// Explicit dialect: bypass extension hints and dispatch the raw content.
fn scan_as(file: &Path, dialect: Dialect, options: &FileOptions) -> Result<Vec<String>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let hinted = file
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Dialect::from_extension);
    if let Some(hint) = hinted.filter(|h| dialect.is_js_family() && *h != dialect) {
        tracing::warn!("{} looks like {hint}, scanning as {dialect}", file.display());
    }

    let mut extract_opts = options.extract.clone();
    extract_opts.dialect = Some(dialect);

    let mut deps = precinct::extract(content.as_str(), extract_opts)
        .with_context(|| format!("failed to scan {} as {dialect}", file.display()))?
        .dependencies;
    if !options.include_core {
        deps.retain(|d| !builtins::is_builtin(d));
    }
    Ok(deps)
}
