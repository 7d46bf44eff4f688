use chrono::Datelike;

use crate::cli::commands::session::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date::{all_days_of_month, parse_date};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { date, role, times } = &cli.command {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let window = all_days_of_month(date.year(), date.month());
        let mut session = open_session(cli, cfg, window)?;

        for i in 1..=*times {
            match session.advance(date, role) {
                Some(key) => {
                    let name = session
                        .roster()
                        .get(&key.staff_id)
                        .map(|s| s.display_name().to_string())
                        .unwrap_or_else(|| key.staff_id.clone());
                    println!("{i:>3}. {key}  {name}");
                }
                None => {
                    warning(format!("No unassigned {role} on {date}"));
                    break;
                }
            }
        }
    }
    Ok(())
}
