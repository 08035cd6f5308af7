pub mod cli;
pub mod error;
pub mod session;

use std::io::Write;

use chrono::NaiveDate;
use hourly_core::config::Settings;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::session::{CalendarSession, OutboxSession, save};

const OCCURRENCE_FORMAT: &str = "%a %Y-%m-%d %H:%M";

/// ## Summary
/// Validates the command line form, plans the event and writes its JSON body to `out`.
///
/// With `--preview` the expanded occurrence starts follow the JSON. With `--save`
/// the event is handed to an outbox session, which is invalidated before returning.
///
/// ## Errors
/// Returns an error if the form is invalid, planning fails, or the outbox cannot be written.
pub fn run(cli: &Cli, settings: &Settings, today: NaiveDate, out: &mut impl Write) -> AppResult<()> {
    let request = cli.to_form(settings).into_request(today)?;
    let plan = hourly_plan::plan(&request)?;

    tracing::info!(
        summary = %plan.event.summary,
        occurrences = plan.window.effective_occurrences,
        hours_per_day = plan.allocation.block.hours_per_day,
        minutes_per_day = plan.allocation.block.minutes_per_day,
        "Event planned"
    );

    writeln!(out, "{}", plan.event.to_json()?)?;

    if let Some(limit) = cli.preview {
        for occurrence in plan.event.occurrences(limit)? {
            writeln!(out, "{}", occurrence.format(OCCURRENCE_FORMAT))?;
        }
    }

    if cli.save {
        let session = OutboxSession::acquire(settings)?;
        let id = save(session, cli.calendar_id(settings), &plan.event)?;
        tracing::info!(id = %id, "Event saved");
    }

    Ok(())
}
