use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use contact_book::audit::AuditLogger;
use contact_book::config::ContactPaths;
use contact_book::session::Session;
use contact_book::storage::ContactRepository;
use contact_book::ContactResult;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact directory",
    long_about = "Interactive contact manager. Add, view, edit and delete contacts \
                  with validated phone numbers and email addresses; the directory \
                  is saved to contacts.json when you run the 'save' command."
)]
struct Cli {
    /// Directory holding contacts.json (defaults to the current directory)
    #[arg(long, env = "CONTACT_BOOK_DIR")]
    data_dir: Option<PathBuf>,

    /// Do not write the audit trail
    #[arg(long)]
    no_audit: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the interactive protocol on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Storage problems are reported by the session, never fatal here
    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new().unwrap_or_else(|e| {
            warn!(error = %e, "using relative paths");
            ContactPaths::with_base_dir(PathBuf::from("."))
        }),
    };
    if let Err(e) = paths.ensure_directories() {
        warn!(error = %e, "could not create data directory");
    }
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let repository = ContactRepository::new(paths.contacts_file());
    let audit = (!cli.no_audit).then(|| AuditLogger::new(paths.audit_log()));

    // Terminal failures are logged; the exit code stays 0
    if let Err(e) = run_session(repository, audit) {
        error!(error = %e, "session ended abnormally");
    }

    Ok(())
}

fn run_session(repository: ContactRepository, audit: Option<AuditLogger>) -> ContactResult<()> {
    let stdin = std::io::stdin();
    let mut session = Session::open(repository, audit, stdin.lock(), std::io::stdout())?;
    session.run()
}
