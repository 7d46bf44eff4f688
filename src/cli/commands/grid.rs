use crate::cli::commands::session::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::date::{resolve_period, weekday_str};
use crate::utils::formatting::colorize_unassigned;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { period, role } = &cli.command {
        let dates = resolve_period(period.as_deref())?;
        let mut session = open_session(cli, cfg, dates)?;

        let roles: Vec<String> = match role {
            Some(r) => vec![r.clone()],
            None => session.roster().roles(),
        };

        if roles.is_empty() {
            warning("The staff roster is empty.");
            return Ok(());
        }

        let summary = session.summary();

        let mut columns = vec![Column::left("date")];
        if cfg.show_weekday {
            columns.push(Column::left("wd"));
        }
        for r in &roles {
            columns.push(Column::right(&format!("{r} avail")));
            columns.push(Column::right(&format!("{r} unassigned")));
        }
        columns.push(Column::right("total"));

        let mut table = Table::new(columns);
        let mut pending = 0;
        for &date in &summary.dates {
            let mut row = vec![date.format("%Y-%m-%d").to_string()];
            if cfg.show_weekday {
                row.push(weekday_str(date).to_string());
            }

            let mut total = 0;
            for r in &roles {
                let available = summary.available_count(date, r);
                let unassigned = summary.unassigned_count(date, r);
                total += available;
                pending += unassigned;
                row.push(available.to_string());
                row.push(unassigned.to_string());
            }
            row.push(total.to_string());

            table.add_row(row);
        }

        header("Shift grid");
        print!("{}", table.render(cfg.separator()));

        if pending > 0 {
            println!();
            warning(format!(
                "{} confirmed cell(s) still without a location",
                colorize_unassigned(pending)
            ));
        }
    }
    Ok(())
}
