use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::run_probe;
use crate::args::ProbeArgs;
use crate::domain::run::RunId;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    apply_config(&mut args, &matches)?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let run_id = RunId::new(&args.host, chrono::Local::now().naive_local());
    tracing::debug!("Derived run id {}", run_id);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_probe(&args, &run_id))
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut ProbeArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}
