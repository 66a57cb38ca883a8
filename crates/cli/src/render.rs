//! Terminal rendering

use std::{
    io::{self, Write},
    ops::Range,
};

use hotelier::{
    hotels::HotelRecord,
    stats::HotelStats,
    validation::ValidationErrors,
};
use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

const LIST_HEADER: [&str; 10] = [
    "ID",
    "Name",
    "Location",
    "Room Type",
    "Price/Night",
    "Rooms",
    "Rating",
    "Check-in",
    "Pets",
    "Amenities",
];

/// `$250.00`
pub(crate) fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("${rounded:.2}")
}

/// `4.5`
pub(crate) fn format_rating(rating: Decimal) -> String {
    let rounded = rating.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.1}")
}

/// `October 15, 2027`
pub(crate) fn format_date(date: Date) -> String {
    date.strftime("%B %-d, %Y").to_string()
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn amenities(hotel: &HotelRecord) -> String {
    hotel.amenities.iter().collect::<Vec<_>>().join(", ")
}

fn push_pair(builder: &mut Builder, label: &str, value: &str) {
    builder.push_record([label, value]);
}

fn write_table(
    out: &mut impl Write,
    builder: Builder,
    numeric: Columns<Range<usize>>,
    has_header: bool,
) -> io::Result<()> {
    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(numeric, Alignment::right());

    if has_header {
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::first(), Alignment::left());
    }

    writeln!(out, "{table}")
}

/// Hotels as a table, or the empty state.
pub(crate) fn write_hotels(out: &mut impl Write, hotels: &[&HotelRecord]) -> io::Result<()> {
    if hotels.is_empty() {
        writeln!(out, "No Hotels Found")?;

        return writeln!(out, "Get started by adding your first hotel!");
    }

    let mut builder = Builder::default();

    builder.push_record(LIST_HEADER);

    for hotel in hotels {
        builder.push_record([
            hotel.id.to_string(),
            hotel.name.clone(),
            hotel.location.clone(),
            hotel.room_type.to_string(),
            format_price(hotel.price_per_night),
            hotel.available_rooms.to_string(),
            format_rating(hotel.rating),
            format_date(hotel.check_in_date),
            yes_no(hotel.is_pet_friendly).to_string(),
            amenities(hotel),
        ]);
    }

    write_table(out, builder, Columns::new(4..7), true)
}

/// Result count shown while a filter is active.
pub(crate) fn write_found(out: &mut impl Write, count: usize) -> io::Result<()> {
    writeln!(out, "Found {count} hotel(s)")
}

/// One hotel as a two-column table.
pub(crate) fn write_hotel(out: &mut impl Write, hotel: &HotelRecord) -> io::Result<()> {
    let mut builder = Builder::default();

    let price = format!("{} per night", format_price(hotel.price_per_night));

    push_pair(&mut builder, "ID", hotel.id.as_str());
    push_pair(&mut builder, "Name", &hotel.name);
    push_pair(&mut builder, "Location", &hotel.location);
    push_pair(&mut builder, "Room Type", hotel.room_type.as_str());
    push_pair(&mut builder, "Price", &price);
    push_pair(&mut builder, "Available Rooms", &hotel.available_rooms.to_string());
    push_pair(&mut builder, "Rating", &format_rating(hotel.rating));
    push_pair(&mut builder, "Check-in", &format_date(hotel.check_in_date));
    push_pair(&mut builder, "Pet Friendly", yes_no(hotel.is_pet_friendly));
    push_pair(&mut builder, "Amenities", &amenities(hotel));

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Columns::first(), Alignment::left());

    writeln!(out, "{table}")
}

/// Summary figures, with the room type breakdown when there is one.
pub(crate) fn write_stats(out: &mut impl Write, stats: &HotelStats) -> io::Result<()> {
    let mut builder = Builder::default();

    push_pair(&mut builder, "Total Hotels", &stats.total_hotels.to_string());
    push_pair(&mut builder, "Available Rooms", &stats.total_available_rooms.to_string());
    push_pair(&mut builder, "Average Rating", &stats.display_average_rating());

    write_table(out, builder, Columns::new(1..2), false)?;

    if stats.room_type_distribution.is_empty() {
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Room Type", "Hotels"]);

    for entry in &stats.room_type_distribution {
        builder.push_record([entry.room_type.to_string(), entry.count.to_string()]);
    }

    write_table(out, builder, Columns::new(1..2), true)
}

/// Field errors, one per line, in form order.
pub(crate) fn write_field_errors(out: &mut impl Write, errors: &ValidationErrors) -> io::Result<()> {
    for (field, error) in errors.iter() {
        writeln!(out, "  {field}: {}", error.message)?;
    }

    Ok(())
}
