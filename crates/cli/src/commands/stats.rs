use std::io::Write;

use clap::Args;
use hotelier_app::context::AppContext;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Ask the store for its own aggregate instead of computing it from the hotel list
    #[arg(long)]
    pub remote: bool,
}

pub(crate) async fn run(
    args: StatsArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let stats = if args.remote {
        context.hotels.hotel_stats().await?
    } else {
        let mut controller = context.controller();

        controller.refresh().await?;
        controller.state().stats()
    };

    render::write_stats(out, &stats)?;

    Ok(())
}
