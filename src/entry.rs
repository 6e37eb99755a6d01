use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::app::run_warmup;
use crate::args::WarmupArgs;
use crate::domain::RunSettings;
use crate::error::AppResult;
use crate::http::UserAgent;
use crate::ui::{ConsoleReporter, print_header};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<Option<(WarmupArgs, ArgMatches)>> {
    let mut cmd = WarmupArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = WarmupArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

async fn run_async(mut args: WarmupArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, matches, &config)?;
    }

    let settings = RunSettings::from_args(&args, UserAgent::detect())?;
    tracing::debug!("User-Agent: {}", settings.client.user_agent.as_str());

    if !settings.no_banner {
        print_header(&settings.domain, settings.workers.get(), settings.no_color)?;
    }

    let mut reporter = ConsoleReporter::stdout(settings.no_color);
    match run_warmup(&settings, &mut reporter).await {
        Ok(report) => {
            info!(
                "Warm-up of {} finished after {} requests",
                settings.domain,
                report.total_requests()
            );
            Ok(())
        }
        Err(err) => {
            if err.is_sitemap() {
                error!("Could not load sitemap {}: {}", settings.sitemap_url, err);
            } else {
                error!("Warm-up failed: {}", err);
            }
            Err(err)
        }
    }
}
