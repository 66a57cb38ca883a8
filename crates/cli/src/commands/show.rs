use std::io::Write;

use clap::Args;
use hotelier::hotels::HotelId;
use hotelier_app::context::AppContext;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Hotel identifier
    pub id: HotelId,
}

pub(crate) async fn run(
    args: ShowArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let hotel = context.hotels.get_hotel(args.id).await?;

    render::write_hotel(out, &hotel)?;

    Ok(())
}
