use crate::cli::commands::session::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::CellKey;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{colorize_status, format_amount};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History { cell } = &cli.command {
        let key: CellKey = cell.parse()?;
        let session = open_session(cli, cfg, vec![key.date])?;

        header(format!("Cell {key}"));
        println!("status   : {}", colorize_status(session.effective_status(&key)));
        println!(
            "base     : {}",
            session.resolver().base_status(&key).as_str()
        );
        println!("dirty    : {}", if session.is_dirty(&key) { "yes" } else { "no" });
        println!("rate     : {}", format_amount(session.effective_rate(&key)));
        println!("location : {}", session.location(&key).unwrap_or("--"));
        println!("locked   : {}", if session.is_locked(&key) { "yes" } else { "no" });
        println!("comment  : {}", session.effective_comment(&key).unwrap_or("--"));

        let history = session.history(&key);
        println!();
        if history.is_empty() {
            info("No status changes recorded for this cell.");
            return Ok(());
        }

        // most recent first
        for entry in history.iter().rev() {
            println!(
                "{}  {} -> {}  by {}",
                entry.timestamp_str(),
                entry.old_status,
                entry.new_status,
                entry.actor
            );
        }
    }
    Ok(())
}
