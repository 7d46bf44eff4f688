use crate::cli::commands::session::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = &cli.command
    {
        let dates = resolve_period(period.as_deref())?;
        let mut session = open_session(cli, cfg, dates)?;

        let roster = session.roster().clone();
        let summary = session.summary();
        ExportLogic::export(summary, &roster, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
