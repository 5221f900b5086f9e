//! CLI entrypoint for transkey
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use transkey_application::{ExtractKeyRequest, ExtractKeySession, TranslationIndexPort};
use transkey_domain::config::has_errors;
use transkey_domain::{OutputFormat, Severity};
use transkey_infrastructure::{ConfigLoader, FileConfig, FsPackageLocator, FsTranslationIndex};
use transkey_presentation::{Cli, Command, InteractiveDialog, formatter_for};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = cli
        .project
        .canonicalize()
        .with_context(|| format!("Project root {} not found", cli.project.display()))?;

    if cli.show_config {
        for line in ConfigLoader::describe_sources(&project_root) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref(), &project_root)
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);

    let Some(command) = cli.command else {
        bail!("No command given. Run `transkey --help` for usage.");
    };

    info!("Starting transkey in {}", project_root.display());

    // === Dependency Injection ===
    let index = FsTranslationIndex::scan(&project_root, &config.index.patterns)
        .context("Failed to scan translation files")?;
    let locator = FsPackageLocator::new(
        &project_root,
        config.packages.suffixes.clone(),
        config.packages.markers.clone(),
    );

    match command {
        Command::Extract {
            context,
            domain,
            key,
        } => {
            let mut request = open_request(&index, &project_root, &context, domain);
            if let Some(key) = key {
                request = request.with_default_key(key);
            }
            let mut session = ExtractKeySession::open(
                Arc::new(index),
                Arc::new(locator),
                request,
                config.session_params(),
            );

            // the dialog draws on stderr; stdout only gets the outcome
            InteractiveDialog::stdio().run_to(
                &mut session,
                &*formatter,
                &mut io::stdout().lock(),
            )?;
        }
        Command::Candidates { context, domain } => {
            let request = open_request(&index, &project_root, &context, domain);
            let session = ExtractKeySession::open(
                Arc::new(index),
                Arc::new(locator),
                request,
                config.session_params(),
            );
            emit(formatter.candidates(session.candidates()));
        }
        Command::Domains => emit(formatter.domains(&index.domains())),
    }

    Ok(())
}

/// Log every config issue; refuse to run when any is an error
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration ({} issue(s)); see the messages above", issues.len());
    }
    Ok(())
}

fn open_request(
    index: &FsTranslationIndex,
    project_root: &Path,
    context: &Path,
    domain: String,
) -> ExtractKeyRequest {
    let domains = index.domains();
    if !domains.contains(&domain) {
        warn!("Domain '{}' has no translation files", domain);
    }
    ExtractKeyRequest::new(resolve_context(project_root, context), domain)
        .with_project_root(project_root)
        .with_domains(domains)
}

/// Absolute path of the context file; it does not have to exist yet
fn resolve_context(project_root: &Path, context: &Path) -> PathBuf {
    context
        .canonicalize()
        .unwrap_or_else(|_| project_root.join(context))
}

fn emit(text: String) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
