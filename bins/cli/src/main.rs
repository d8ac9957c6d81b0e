//! notedrop command-line host
//!
//! Plays the editor's part for a markdown note on disk: the note is loaded
//! into a buffer, a file is pasted or dropped at the cursor, the upload runs
//! and the rewritten note is saved.

mod note;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notedrop_core::editor::{Notice, NoticeLevel, Notifier, shared};
use notedrop_core::intake::{EditorEvent, TransferFile};
use notedrop_core::storage::{FsVault, S3ObjectStore};
use notedrop_core::{Claim, Dispatcher, Uploader, fingerprint};
use notedrop_shared::{AppConfig, AppError};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Parser)]
#[command(name = "notedrop", version, about = "Paste media into markdown notes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paste (or drop) a file into a note and upload it
    Paste(PasteArgs),
    /// Print the content key of a file
    Fingerprint {
        /// File to hash
        path: PathBuf,
    },
}

#[derive(Args)]
struct PasteArgs {
    /// Markdown note to edit
    #[arg(long)]
    note: PathBuf,
    /// Media file to paste
    #[arg(long)]
    file: PathBuf,
    /// Declared MIME type; sniffed from the file contents when absent
    #[arg(long)]
    mime: Option<String>,
    /// Zero-based line to paste at; defaults to the end of the note
    #[arg(long)]
    line: Option<usize>,
    /// Deliver the file as a drop instead of a paste
    #[arg(long)]
    drop: bool,
    /// Vault root for local uploads; defaults to the note's directory
    #[arg(long)]
    vault: Option<PathBuf>,
}

/// Prints notices the way a host would flash them.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("{}", notice.message),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notedrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Command::Paste(args) => paste(args).await,
        Command::Fingerprint { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            println!("{}", fingerprint(&bytes, &file_name(&path)?));
            Ok(())
        }
    }
}

async fn paste(args: PasteArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;

    let text = tokio::fs::read_to_string(&args.note)
        .await
        .map_err(AppError::from)
        .with_context(|| format!("cannot read note {}", args.note.display()))?;
    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(AppError::from)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    let name = file_name(&args.file)?;
    let mime_type = args
        .mime
        .unwrap_or_else(|| detect_mime_type(&bytes).to_string());

    let vault_root = match args.vault {
        Some(root) => root,
        None => args
            .note
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };

    let store = S3ObjectStore::from_config(&config.s3)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    let vault = FsVault::open(&vault_root).map_err(|e| AppError::Storage(e.to_string()))?;
    let dispatcher = Dispatcher::new(Arc::new(store), Arc::new(vault));
    let uploader = Uploader::new(
        Arc::new(config.upload),
        Arc::new(dispatcher),
        Arc::new(ConsoleNotifier),
    );

    let frontmatter = note::frontmatter(&text);
    let editor = shared(note::open(text, args.line));

    let files = vec![TransferFile::new(name, mime_type, bytes)];
    let event = if args.drop {
        EditorEvent::drop(files)
    } else {
        EditorEvent::paste(files)
    };

    let pending = match uploader.handle_event(&editor, event, &frontmatter) {
        Claim::Declined(reason) => {
            info!(reason = %reason, note = %args.note.display(), "not claimed, note left untouched");
            return Ok(());
        }
        Claim::Claimed(pending) => pending,
    };

    let report = pending
        .finished()
        .await
        .map_err(|e| AppError::Task(e.to_string()))?;

    let updated = editor.lock().text().to_string();
    tokio::fs::write(&args.note, updated)
        .await
        .map_err(AppError::from)
        .with_context(|| format!("cannot write note {}", args.note.display()))?;

    if let Err(e) = report.result {
        error!(key = %report.key, error = %e, "upload failed");
        anyhow::bail!("upload of {} failed", report.key);
    }

    info!(key = %report.key, note = %args.note.display(), "note updated");
    Ok(())
}

/// MIME type from the file's magic bytes, as a browser would declare it.
fn detect_mime_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes).map_or(FALLBACK_MIME_TYPE, |kind| kind.mime_type())
}

fn file_name(path: &Path) -> Result<String, AppError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidInput(format!("{} has no file name", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::png(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR", "image/png")]
    #[case::pdf(b"%PDF-1.7\n", "application/pdf")]
    #[case::mp3(b"ID3\x04\0\0\0\0\0\0", "audio/mpeg")]
    #[case::text(b"just some notes", FALLBACK_MIME_TYPE)]
    #[case::empty(b"", FALLBACK_MIME_TYPE)]
    fn test_detect_mime_type(#[case] bytes: &[u8], #[case] expected: &str) {
        assert_eq!(detect_mime_type(bytes), expected);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/shot.png")).unwrap(), "shot.png");
        assert!(file_name(Path::new("/")).is_err());
    }
}
