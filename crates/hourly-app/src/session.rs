//! Handing a planned event to a calendar.
//!
//! A session is acquired explicitly, used for any number of inserts, and
//! invalidated explicitly; `invalidate` consumes the handle so it cannot be used
//! afterwards. A session dropped without being invalidated still gives up its
//! lock. The planner never sees a session.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use hourly_core::config::{OutboxConfig, Settings};
use hourly_core::util::slug::generate_slug;
use hourly_plan::ScheduledEvent;

use crate::error::{AppError, AppResult};

const LOCK_FILE: &str = ".session";

pub trait CalendarSession: Sized {
    /// ## Summary
    /// Opens a session using the given configuration.
    ///
    /// ## Errors
    /// Returns an error if the session cannot be established.
    fn acquire(settings: &Settings) -> AppResult<Self>;

    /// ## Summary
    /// Stores `event` in `calendar_id` and returns an identifier for the stored copy.
    ///
    /// ## Errors
    /// Returns an error if the event cannot be stored.
    fn insert(&mut self, calendar_id: &str, event: &ScheduledEvent) -> AppResult<String>;

    /// ## Summary
    /// Ends the session.
    ///
    /// ## Errors
    /// Returns an error if releasing the session fails.
    fn invalidate(self) -> AppResult<()>;
}

/// ## Summary
/// Inserts `event` through `session` and then invalidates the session.
///
/// ## Errors
/// Returns the insert error if the insert fails; a release failure after a failed
/// insert is only logged. If the insert succeeds, returns the release error.
pub fn save<S: CalendarSession>(
    mut session: S,
    calendar_id: &str,
    event: &ScheduledEvent,
) -> AppResult<String> {
    let inserted = session.insert(calendar_id, event);
    match (inserted, session.invalidate()) {
        (Ok(id), Ok(())) => Ok(id),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), released) => {
            if let Err(release_err) = released {
                tracing::warn!(error = %release_err, "Failed to release session after insert error");
            }
            Err(e)
        }
    }
}

/// Exclusive claim on an outbox, held as a lock file naming the owning process.
///
/// The file is removed on `release`, or on drop if the holder never released it.
#[derive(Debug)]
struct SessionLock {
    path: PathBuf,
    held: bool,
}

impl SessionLock {
    fn acquire(path: PathBuf) -> AppResult<Self> {
        let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(AppError::SessionActive(path));
            }
            Err(e) => return Err(e.into()),
        };

        let lock = Self { path, held: true };
        writeln!(file, "{}", std::process::id())?;
        Ok(lock)
    }

    fn release(mut self) -> AppResult<()> {
        self.held = false;
        fs::remove_file(&self.path)?;
        Ok(())
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        if !self.held {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Released abandoned session lock"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to release session lock");
            }
        }
    }
}

/// Writes each event's insert body as JSON under `<outbox>/<calendar-id>/`.
///
/// Holds a lock file in the outbox root for as long as the session is live.
#[derive(Debug)]
pub struct OutboxSession {
    outbox: OutboxConfig,
    lock: SessionLock,
    inserted: usize,
}

impl CalendarSession for OutboxSession {
    fn acquire(settings: &Settings) -> AppResult<Self> {
        let outbox = settings.outbox.clone();
        fs::create_dir_all(outbox.root())?;

        let lock = SessionLock::acquire(outbox.root().join(LOCK_FILE))?;

        tracing::debug!(root = %outbox.root().display(), "Outbox session acquired");
        Ok(Self {
            outbox,
            lock,
            inserted: 0,
        })
    }

    fn insert(&mut self, calendar_id: &str, event: &ScheduledEvent) -> AppResult<String> {
        let dir = self.outbox.calendar_dir(calendar_id);
        fs::create_dir_all(&dir)?;

        let file_name = format!(
            "{}-{}.json",
            generate_slug(&event.summary),
            event.start.date()
        );
        let path = dir.join(file_name);
        fs::write(&path, event.to_json()?)?;

        tracing::info!(path = %path.display(), calendar_id, "Event written to outbox");
        self.inserted += 1;
        Ok(path.display().to_string())
    }

    fn invalidate(self) -> AppResult<()> {
        self.lock.release()?;
        tracing::debug!(
            root = %self.outbox.root().display(),
            events = self.inserted,
            "Outbox session invalidated"
        );
        Ok(())
    }
}
