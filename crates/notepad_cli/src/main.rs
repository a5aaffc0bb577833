//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notepad_core` linkage with one add + search round-trip.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Environment:
//! - `NOTEPAD_LOG_DIR`: absolute directory for rolling logs; logging stays
//!   off when unset or blank.
//! - `NOTEPAD_LOG_LEVEL`: `trace|debug|info|warn|error`, defaults to the
//!   build-mode level.

use log::info;
use notepad_core::{InMemoryNoteStore, NoteDraft, NoteForm, NoteService};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_env() {
        eprintln!("notepad_cli logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    println!("notepad_core ping={}", notepad_core::ping());
    println!("notepad_core version={}", notepad_core::core_version());

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut service = NoteService::new(InMemoryNoteStore::new());
    let probe = NoteForm {
        id: None,
        draft: NoteDraft::new("smoke probe", "notepad_core wiring check"),
    };
    let id = match service.submit(probe) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("notepad_cli submit failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cards = service.search(&query);
    info!(
        "event=cli_smoke module=cli status=ok id={} hits={}",
        id,
        cards.len()
    );
    println!("notepad_core probe_id={id} hits={}", cards.len());
    ExitCode::SUCCESS
}

fn init_logging_from_env() -> Result<(), String> {
    let Some(log_dir) = env_non_blank("NOTEPAD_LOG_DIR") else {
        return Ok(());
    };
    let level = env_non_blank("NOTEPAD_LOG_LEVEL")
        .unwrap_or_else(|| notepad_core::default_log_level().to_string());
    notepad_core::init_logging(&level, &log_dir)
}

fn env_non_blank(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
