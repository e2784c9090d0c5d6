use clap::Parser;
use color_eyre::eyre::Result;

use litriage::{
    core::state::ExportOptions,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::{app_runner::AppRunner, report::progress_report},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), then let the command line override it
    let mut config = Config::new()?;
    if let Some(sort_by) = args.sort_by {
        config.review.sort_column = sort_by;
    }

    if args.progress {
        let progress = progress_report(&args.input, &config.review)?;
        println!("{}: {progress}", args.input.display());
        return Ok(());
    }

    let export = ExportOptions {
        target: args.output,
        format: args.format,
    };
    let tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut runner = AppRunner::new(config, args.input, export, tui);
    runner.run().await?;

    if let Some(path) = &runner.state().review.last_export {
        println!("Exported to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
