use std::io::{BufRead, Write};

use clap::Args;
use hotelier::hotels::HotelId;
use hotelier_app::context::AppContext;
use tracing::info;

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Hotel identifier
    pub id: HotelId,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

pub(crate) async fn run(
    args: DeleteArgs,
    context: &AppContext,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = context.controller();
    let hotel = context.hotels.get_hotel(args.id.clone()).await?;

    if !args.yes && !confirm(&hotel.name, input, out)? {
        writeln!(out, "Cancelled")?;

        return Ok(());
    }

    controller.delete(&hotel.id).await?;

    info!(id = %hotel.id, "hotel deleted");

    writeln!(out, "Deleted \"{}\"", hotel.name)?;

    Ok(())
}

fn confirm(name: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool, CliError> {
    write!(
        out,
        "Are you sure you want to delete \"{name}\"? This action cannot be undone. [y/N] "
    )?;
    out.flush()?;

    let mut answer = String::new();

    input.read_line(&mut answer).map_err(CliError::Input)?;

    let answer = answer.trim();

    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use hotelier_app::api::ListHotelsQuery;
    use testresult::TestResult;

    use super::*;
    use crate::commands::test_support::{local_context, output};

    fn args(yes: bool) -> DeleteArgs {
        DeleteArgs {
            id: HotelId::new("sunset-beach"),
            yes,
        }
    }

    #[tokio::test]
    async fn confirmed_delete_removes_hotel() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        run(args(false), &context, &mut &b"y\n"[..], &mut out).await?;

        let hotels = context.hotels.list_hotels(ListHotelsQuery::default()).await?;

        assert_eq!(hotels.len(), 2);
        assert_eq!(
            output(out)?,
            "Are you sure you want to delete \"Sunset Beach Resort\"? This action cannot be undone. [y/N] Deleted \"Sunset Beach Resort\"\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn anything_but_yes_cancels() -> TestResult {
        let context = local_context()?;

        for answer in ["\n", "n\n", "maybe\n", ""] {
            let mut out = Vec::new();

            run(args(false), &context, &mut answer.as_bytes(), &mut out).await?;

            assert!(output(out)?.ends_with("Cancelled\n"));
        }

        let hotels = context.hotels.list_hotels(ListHotelsQuery::default()).await?;

        assert_eq!(hotels.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn yes_flag_skips_prompt() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        run(args(true), &context, &mut &b""[..], &mut out).await?;

        assert_eq!(output(out)?, "Deleted \"Sunset Beach Resort\"\n");

        Ok(())
    }
}
