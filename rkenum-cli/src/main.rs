//! rkenum CLI - generate typed Go enums with parsing and string helpers.
//!
//! Commands:
//! - `gen` (alias `enum`): render an enum definition to stdout or a file
//! - `version`: print build information

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use rkenum_core::{build, init_logging_from_config, load_config, render, RkenumConfig};

#[derive(Parser, Debug)]
#[command(name = "rkenum", author, version, about = "Need an enum? Rye Knot")]
pub struct Cli {
    /// Config file (default is $HOME/.config/rk/rkenum.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an enum
    #[command(visible_alias = "enum")]
    Gen(GenArgs),

    /// Display version
    Version,
}

#[derive(Args, Debug, Default)]
struct GenArgs {
    /// Package name
    #[arg(short, long, env = "RKENUM_PACKAGE")]
    package: Option<String>,

    /// Name of the enum
    #[arg(short, long)]
    name: Option<String>,

    /// Values of the enum (comma or space separated, repeatable)
    #[arg(short, long, num_args = 1..)]
    values: Vec<String>,

    /// Don't generate Unknown value
    #[arg(long)]
    no_unknown: bool,

    /// Generate the Unknown value even if the config disables it
    #[arg(long, conflicts_with = "no_unknown")]
    unknown: bool,

    /// Alias for a value, as alias=value (repeatable)
    #[arg(short, long = "alias", value_delimiter = ',')]
    aliases: Vec<String>,

    /// Write the generated source to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
}

/// Build metadata injected at compile time, `unknown` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionInfo {
    version: &'static str,
    commit: &'static str,
    build_date: &'static str,
    rustc: &'static str,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            version: option_env!("RKENUM_GIT_TAG").unwrap_or(env!("CARGO_PKG_VERSION")),
            commit: option_env!("RKENUM_COMMIT_HASH").unwrap_or("unknown"),
            build_date: option_env!("RKENUM_BUILD_DATE").unwrap_or("unknown"),
            rustc: option_env!("RKENUM_RUSTC_VERSION").unwrap_or("unknown"),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version    : {}", self.version)?;
        writeln!(f, "Commit     : {}", self.commit)?;
        writeln!(f, "Build date : {}", self.build_date)?;
        writeln!(f, "Rustc      : {}", self.rustc)
    }
}

/// Validates and renders the enum described by the flags.
///
/// Flags win over config defaults. Missing package, name or values surface
/// as the core's validation errors.
fn generate_source(args: &GenArgs, config: &RkenumConfig) -> Result<String> {
    let package = args
        .package
        .as_deref()
        .or_else(|| config.default_package())
        .unwrap_or_default();
    let name = args.name.as_deref().unwrap_or_default();
    let no_unknown = if args.unknown {
        false
    } else {
        args.no_unknown || config.default_no_unknown()
    };

    let model = build(package, name, &args.values, no_unknown, &args.aliases)?;
    let source = render(&model)?;
    info!(
        package = %model.package(),
        name = %model.name(),
        values = model.values().len(),
        "generated enum"
    );
    Ok(source)
}

/// Security: Validates output file paths to prevent path traversal attacks.
///
/// Rejects:
/// - Absolute paths (must be relative to current directory)
/// - Paths containing `..` (parent directory traversal)
/// - Paths with null bytes (injection attacks)
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);

    if p.is_absolute() {
        return Err(anyhow!(
            "Output path must be relative, not absolute: {}",
            path
        ));
    }

    if p
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err(anyhow!(
            "Path traversal (..) not allowed in output paths: {}",
            path
        ));
    }

    Ok(p)
}

fn write_output_file(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = source.len(), "wrote generated source");
    Ok(())
}

fn emit(source: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(raw) => {
            let path = validate_output_path(raw)?;
            write_output_file(&path, source)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write generated source to stdout")
        }
    }
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] rkenum internal error: {}", info);
    }));

    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref())?;
    let config = loaded
        .as_ref()
        .map(|l| l.config.clone())
        .unwrap_or_default();

    // Logs go to stderr; stdout carries only generated source
    init_logging_from_config(config.log_format());
    if let Some(l) = &loaded {
        info!(path = %l.path.display(), "Using config file");
    }

    match cli.command {
        Command::Gen(args) => {
            let source = generate_source(&args, &config)?;
            emit(&source, args.output.as_deref())
        }
        Command::Version => {
            print!("{}", VersionInfo::current());
            Ok(())
        }
    }
}
