use std::io::Write;

use clap::{Args, builder::PossibleValuesParser};
use hotelier::{
    hotels::{Amenities, RoomType},
    validation::HotelDraft,
};
use hotelier_app::{context::AppContext, controller::HotelsController};

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Hotel name
    #[arg(long)]
    pub name: String,

    /// Location, e.g. "Miami, FL"
    #[arg(long)]
    pub location: String,

    /// Room type on offer
    #[arg(long, default_value_t = RoomType::default())]
    pub room_type: RoomType,

    /// Nightly price
    #[arg(long)]
    pub price: String,

    /// Rooms available
    #[arg(long)]
    pub rooms: String,

    /// Guest rating between 1 and 5
    #[arg(long)]
    pub rating: String,

    /// First bookable night, YYYY-MM-DD
    #[arg(long)]
    pub check_in: String,

    /// Pets are allowed
    #[arg(long)]
    pub pet_friendly: bool,

    /// Amenity offered; repeat for several
    #[arg(long = "amenity", value_parser = PossibleValuesParser::new(Amenities::OPTIONS))]
    pub amenities: Vec<String>,
}

pub(crate) async fn run(
    args: AddArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = context.controller();

    controller.begin_create();

    let draft = HotelDraft {
        name: args.name,
        location: args.location,
        room_type: args.room_type,
        price_per_night: args.price,
        available_rooms: args.rooms,
        rating: args.rating,
        check_in_date: args.check_in,
        is_pet_friendly: args.pet_friendly,
        amenities: args.amenities.into_iter().collect::<Amenities>(),
    };

    save(&mut controller, &draft, "Created", out).await
}

/// Submit `draft` and print the saved hotel, or the rejected fields.
pub(super) async fn save(
    controller: &mut HotelsController,
    draft: &HotelDraft,
    verb: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match controller.submit(draft).await {
        Ok(hotel) => {
            writeln!(out, "{verb} hotel {}", hotel.id)?;
            render::write_hotel(out, &hotel)?;

            Ok(())
        }
        Err(error) => {
            let errors = &controller.state().form_errors;

            if !errors.is_empty() {
                writeln!(out, "Please fix the following:")?;
                render::write_field_errors(out, errors)?;
            }

            Err(error.into())
        }
    }
}
