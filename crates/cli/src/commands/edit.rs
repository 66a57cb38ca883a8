use std::io::Write;

use clap::{Args, builder::PossibleValuesParser};
use hotelier::hotels::{Amenities, HotelId, RoomType};
use hotelier_app::context::AppContext;

use crate::{commands::add::save, errors::CliError};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Hotel identifier
    pub id: HotelId,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,

    /// New room type
    #[arg(long)]
    pub room_type: Option<RoomType>,

    /// New nightly price
    #[arg(long)]
    pub price: Option<String>,

    /// New number of available rooms
    #[arg(long)]
    pub rooms: Option<String>,

    /// New rating
    #[arg(long)]
    pub rating: Option<String>,

    /// New check-in date, YYYY-MM-DD
    #[arg(long)]
    pub check_in: Option<String>,

    /// Whether pets are allowed
    #[arg(long)]
    pub pet_friendly: Option<bool>,

    /// Add the amenity if missing, remove it otherwise; repeat for several
    #[arg(
        long = "toggle-amenity",
        value_parser = PossibleValuesParser::new(Amenities::OPTIONS)
    )]
    pub toggle_amenities: Vec<String>,
}

pub(crate) async fn run(
    args: EditArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = context.controller();
    let mut draft = controller.begin_edit(&args.id).await?;

    if let Some(name) = args.name {
        draft.name = name;
    }

    if let Some(location) = args.location {
        draft.location = location;
    }

    if let Some(room_type) = args.room_type {
        draft.room_type = room_type;
    }

    if let Some(price) = args.price {
        draft.price_per_night = price;
    }

    if let Some(rooms) = args.rooms {
        draft.available_rooms = rooms;
    }

    if let Some(rating) = args.rating {
        draft.rating = rating;
    }

    if let Some(check_in) = args.check_in {
        draft.check_in_date = check_in;
    }

    if let Some(pet_friendly) = args.pet_friendly {
        draft.is_pet_friendly = pet_friendly;
    }

    for amenity in &args.toggle_amenities {
        draft.amenities.toggle(amenity);
    }

    save(&mut controller, &draft, "Updated", out).await
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::commands::test_support::{local_context, output};

    fn args(id: &str) -> EditArgs {
        EditArgs {
            id: HotelId::new(id),
            name: None,
            location: None,
            room_type: None,
            price: None,
            rooms: None,
            rating: None,
            check_in: None,
            pet_friendly: None,
            toggle_amenities: Vec::new(),
        }
    }

    #[tokio::test]
    async fn updates_only_given_fields() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let edit = EditArgs {
            price: Some("275".to_string()),
            check_in: Some("2099-03-01".to_string()),
            toggle_amenities: vec!["Gym".to_string(), "Spa".to_string()],
            ..args("mountain-view")
        };

        run(edit, &context, &mut out).await?;

        let hotel = context.hotels.get_hotel(HotelId::new("mountain-view")).await?;

        assert_eq!(hotel.name, "Mountain View Lodge");
        assert_eq!(hotel.price_per_night, Decimal::from(275));
        assert_eq!(hotel.available_rooms, 25);
        assert!(!hotel.amenities.contains("Gym"));
        assert!(hotel.amenities.contains("Spa"));
        assert!(output(out)?.starts_with("Updated hotel mountain-view\n"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_hotel_is_an_error() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let result = run(args("missing"), &context, &mut out).await;

        assert!(matches!(result, Err(CliError::Api(_))));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_edit_keeps_stored_hotel() -> TestResult {
        let context = local_context()?;
        let mut out = Vec::new();

        let edit = EditArgs {
            rooms: Some("-1".to_string()),
            ..args("grand-plaza")
        };

        let result = run(edit, &context, &mut out).await;
        let hotel = context.hotels.get_hotel(HotelId::new("grand-plaza")).await?;

        assert!(matches!(result, Err(CliError::Invalid(_))));
        assert_eq!(hotel.available_rooms, 15);
        assert!(output(out)?.contains("availableRooms: Rooms cannot be negative"));

        Ok(())
    }
}
