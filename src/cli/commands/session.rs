use chrono::NaiveDate;
use std::path::PathBuf;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{RateCalendar, ShiftSession};
use crate::dataset::{load_edits, load_records, load_staff};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Build a session over `window` from the files named on the command line
/// (or in the config), then replay the edit script if one was given.
pub fn open_session(cli: &Cli, cfg: &Config, window: Vec<NaiveDate>) -> AppResult<ShiftSession> {
    let staff_path: PathBuf = cli
        .staff
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.staff_path());
    let records_path: PathBuf = cli
        .records
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.records_path());

    let staff = load_staff(&staff_path)?;
    let records = load_records(&records_path)?;
    let calendar = RateCalendar::from_config(cfg)?;

    let actor = cli.actor.clone().unwrap_or_else(|| cfg.default_actor.clone());
    let mut session =
        ShiftSession::new(records, staff, window, calendar)?.with_default_actor(actor);

    if let Some(edits) = &cli.edits {
        let events = load_edits(&expand_tilde(edits))?;

        let mut applied = 0;
        for event in &events {
            if session.apply(event)? {
                applied += 1;
            }
        }

        info(format!(
            "Replayed {} edit(s), {} applied, {} ignored",
            events.len(),
            applied,
            events.len() - applied
        ));
    }

    Ok(session)
}
