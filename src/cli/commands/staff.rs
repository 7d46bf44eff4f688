use crate::cli::commands::session::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::resolve_period;
use crate::utils::formatting::{bold, format_amount};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Staff { period, role } = &cli.command {
        let dates = resolve_period(period.as_deref())?;
        let mut session = open_session(cli, cfg, dates)?;

        let members: Vec<_> = session
            .roster()
            .members()
            .iter()
            .filter(|m| role.as_deref().is_none_or(|r| m.role == r))
            .cloned()
            .collect();
        let roles: Vec<String> = match role {
            Some(r) => vec![r.clone()],
            None => session.roster().roles(),
        };

        let summary = session.summary();

        let mut table = Table::new(vec![
            Column::left("staff"),
            Column::left("name"),
            Column::left("role"),
            Column::left("company"),
            Column::right("days"),
            Column::right("earnings"),
        ]);
        for m in &members {
            table.add_row(vec![
                m.id.clone(),
                m.display_name().to_string(),
                m.role.clone(),
                m.company.clone(),
                summary.worked_days(&m.id).to_string(),
                format_amount(summary.earnings(&m.id)),
            ]);
        }

        header("Staff totals");
        print!("{}", table.render(cfg.separator()));

        let mut by_role = Table::new(vec![Column::left("role"), Column::right("earnings")]);
        let mut total = 0;
        for r in &roles {
            let earned = summary.role_earnings(r);
            total += earned;
            by_role.add_row(vec![r.clone(), format_amount(earned)]);
        }

        println!();
        header("Role totals");
        print!("{}", by_role.render(cfg.separator()));
        println!("\n{} {}", bold("Total earnings:"), format_amount(total));
    }
    Ok(())
}
