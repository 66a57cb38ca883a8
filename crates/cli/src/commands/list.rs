use std::io::Write;

use clap::Args;
use hotelier::filter::RoomTypeFilter;
use hotelier_app::{api::ListHotelsQuery, context::AppContext};
use rust_decimal::Decimal;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only hotels whose name or location contains this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Room type to show, or "All"
    #[arg(long, default_value_t = RoomTypeFilter::All)]
    pub room_type: RoomTypeFilter,

    /// Lowest nightly price
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest nightly price
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Lowest rating
    #[arg(long)]
    pub min_rating: Option<Decimal>,
}

pub(crate) async fn run(
    args: ListArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = context.controller();

    controller.set_search(args.search.unwrap_or_default());
    controller.set_room_type(args.room_type);

    let query = ListHotelsQuery {
        min_price: args.min_price,
        max_price: args.max_price,
        min_rating: args.min_rating,
        ..ListHotelsQuery::from_filter(&controller.state().filter)
    };

    controller.refresh_query(query).await?;

    let state = controller.state();
    let visible = state.visible_hotels();

    if state.filter.is_active() {
        render::write_found(out, visible.len())?;
    }

    render::write_hotels(out, &visible)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use hotelier::hotels::RoomType;
    use testresult::TestResult;

    use super::*;
    use crate::commands::test_support::{local_context, output};

    fn args() -> ListArgs {
        ListArgs {
            search: None,
            room_type: RoomTypeFilter::All,
            min_price: None,
            max_price: None,
            min_rating: None,
        }
    }

    #[tokio::test]
    async fn lists_every_hotel_without_count_line() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        run(args(), &context, &mut out).await?;

        let output = output(out)?;

        assert!(!output.contains("Found"));
        assert!(output.contains("Grand Plaza Hotel"));
        assert!(output.contains("Sunset Beach Resort"));
        assert!(output.contains("Mountain View Lodge"));

        Ok(())
    }

    #[tokio::test]
    async fn search_reports_match_count() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let list = ListArgs {
            search: Some("MIAMI".to_string()),
            ..args()
        };

        run(list, &context, &mut out).await?;

        let output = output(out)?;

        assert!(output.starts_with("Found 1 hotel(s)\n"));
        assert!(output.contains("Sunset Beach Resort"));
        assert!(!output.contains("Grand Plaza Hotel"));

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_room_type_shows_empty_state() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let list = ListArgs {
            room_type: RoomType::Presidential.into(),
            ..args()
        };

        run(list, &context, &mut out).await?;

        let output = output(out)?;

        assert!(output.starts_with("Found 0 hotel(s)\n"));
        assert!(output.contains("No Hotels Found"));

        Ok(())
    }

    #[tokio::test]
    async fn price_bounds_are_pushed_to_the_store() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let list = ListArgs {
            max_price: Some(Decimal::from(200)),
            ..args()
        };

        run(list, &context, &mut out).await?;

        let output = output(out)?;

        assert!(output.contains("Mountain View Lodge"));
        assert!(!output.contains("Grand Plaza Hotel"));

        Ok(())
    }
}
