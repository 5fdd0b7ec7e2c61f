use anyhow::{Context, Result};
use clap::Parser;
use pkghash::{Config, Fingerprinter, Salt};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// pkghash — content-derived fingerprints for package directories.
#[derive(Parser, Debug)]
#[command(name = "pkghash", version, about)]
struct Cli {
    /// Package directories or files inside them, hashed in the order given
    #[arg(required_unless_present = "pepper")]
    paths: Vec<PathBuf>,

    /// Salt mixed into the fingerprint, used verbatim
    #[arg(long, conflicts_with = "salt_json")]
    salt: Option<String>,

    /// Salt given as a JSON object or array, hashed in canonical form
    #[arg(long, value_name = "JSON")]
    salt_json: Option<String>,

    /// Manifest file that marks a package directory
    #[arg(long, default_value = pkghash_core::DEFAULT_MANIFEST)]
    manifest: String,

    /// Program used to diff git working trees
    #[arg(long, default_value = "git", conflicts_with = "no_diff")]
    git: PathBuf,

    /// Ignore uncommitted changes
    #[arg(long)]
    no_diff: bool,

    /// Diff output above this size is ignored
    #[arg(long, default_value_t = pkghash_core::DEFAULT_MAX_DIFF_BYTES)]
    max_diff_bytes: usize,

    /// Print this tool's own fingerprint and exit
    #[arg(long)]
    pepper: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let config = Config::default()
            .with_manifest(&self.manifest)
            .with_max_diff_bytes(self.max_diff_bytes);
        if self.no_diff {
            config.without_diff()
        } else {
            config.with_git(&self.git)
        }
    }

    fn salt(&self) -> Result<Option<Salt>> {
        if let Some(text) = &self.salt {
            return Ok(Some(Salt::from(text.as_str())));
        }
        let Some(json) = &self.salt_json else {
            return Ok(None);
        };
        let value: serde_json::Value =
            serde_json::from_str(json).context("--salt-json is not valid JSON")?;
        Ok(Some(Salt::try_from(value)?))
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let fingerprinter = Fingerprinter::with_config(cli.config());
    let pepper = fingerprinter
        .pepper()
        .context("failed to compute pkghash's own fingerprint")?;

    if cli.pepper {
        return Ok(pepper.to_hex());
    }

    let salt = cli.salt()?;
    debug!(paths = cli.paths.len(), salted = salt.is_some(), "fingerprinting");
    let digest = match cli.paths.as_slice() {
        [path] => fingerprinter.fingerprint(path, salt.as_ref()),
        paths => fingerprinter.fingerprint_many(paths, salt.as_ref()),
    }
    .with_context(|| format!("failed to fingerprint {}", display_paths(&cli.paths)))?;

    info!(%digest, "fingerprint computed");
    Ok(digest)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    println!("{}", run(&cli)?);
    Ok(())
}
