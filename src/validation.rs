//! Hotel form validation
//!
//! Every field is checked independently and all failures are collected, so a rejected draft
//! reports each broken field at once. Accepted drafts come back normalized: text trimmed and
//! numbers parsed.

use jiff::{Zoned, civil::Date};
use rust_decimal::Decimal;

use crate::hotels::NewHotel;

mod draft;
mod errors;

pub use draft::HotelDraft;
pub use errors::{ErrorCode, Field, FieldError, ValidationErrors};

/// Minimum hotel name length, in characters, after trimming.
pub const MIN_NAME_LENGTH: usize = 3;

/// Highest accepted nightly price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Highest accepted number of available rooms.
pub const MAX_ROOMS: i64 = 1_000;

/// Lowest accepted rating.
pub const MIN_RATING: Decimal = Decimal::ONE;

/// Highest accepted rating.
pub const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Validate a draft against today's date in the local time zone.
///
/// # Errors
///
/// Returns every rejected field when any rule fails.
pub fn validate_today(draft: &HotelDraft) -> Result<NewHotel, ValidationErrors> {
    validate(draft, Zoned::now().date())
}

/// Validate a draft, treating `today` as the earliest acceptable check-in date.
///
/// # Errors
///
/// Returns every rejected field when any rule fails.
pub fn validate(draft: &HotelDraft, today: Date) -> Result<NewHotel, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = errors.check(Field::Name, check_name(&draft.name));
    let location = errors.check(Field::Location, check_location(&draft.location));
    let price_per_night = errors.check(Field::PricePerNight, check_price(&draft.price_per_night));
    let available_rooms = errors.check(Field::AvailableRooms, check_rooms(&draft.available_rooms));
    let rating = errors.check(Field::Rating, check_rating(&draft.rating));
    let check_in_date = errors.check(
        Field::CheckInDate,
        check_check_in_date(&draft.check_in_date, today),
    );

    match (
        name,
        location,
        price_per_night,
        available_rooms,
        rating,
        check_in_date,
    ) {
        (
            Some(name),
            Some(location),
            Some(price_per_night),
            Some(available_rooms),
            Some(rating),
            Some(check_in_date),
        ) => Ok(NewHotel {
            name: name.to_string(),
            location: location.to_string(),
            room_type: draft.room_type,
            price_per_night,
            available_rooms,
            rating,
            check_in_date,
            is_pet_friendly: draft.is_pet_friendly,
            amenities: draft.amenities.clone(),
        }),
        _ => Err(errors),
    }
}

fn check_name(raw: &str) -> Result<&str, ErrorCode> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ErrorCode::Required);
    }

    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ErrorCode::TooShort);
    }

    Ok(name)
}

fn check_location(raw: &str) -> Result<&str, ErrorCode> {
    let location = raw.trim();

    if location.is_empty() {
        return Err(ErrorCode::Required);
    }

    Ok(location)
}

fn check_price(raw: &str) -> Result<Decimal, ErrorCode> {
    let price = parse_decimal(raw)?;

    if price <= Decimal::ZERO || price > MAX_PRICE {
        return Err(ErrorCode::OutOfRange);
    }

    Ok(price)
}

fn check_rooms(raw: &str) -> Result<u32, ErrorCode> {
    let text = raw.trim();

    if !is_plain_number(text, false) {
        return Err(ErrorCode::InvalidNumber);
    }

    // Well-formed but wider than i64
    let Ok(rooms) = text.parse::<i64>() else {
        return Err(if text.starts_with('-') {
            ErrorCode::Negative
        } else {
            ErrorCode::OutOfRange
        });
    };

    if rooms < 0 {
        return Err(ErrorCode::Negative);
    }

    if rooms > MAX_ROOMS {
        return Err(ErrorCode::OutOfRange);
    }

    u32::try_from(rooms).ok().ok_or(ErrorCode::OutOfRange)
}

fn check_rating(raw: &str) -> Result<Decimal, ErrorCode> {
    let rating = parse_decimal(raw)?;

    if rating < MIN_RATING || rating > MAX_RATING {
        return Err(ErrorCode::OutOfRange);
    }

    Ok(rating)
}

fn check_check_in_date(raw: &str, today: Date) -> Result<Date, ErrorCode> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ErrorCode::Required);
    }

    let date = raw.parse::<Date>().ok().ok_or(ErrorCode::InvalidDate)?;

    if date < today {
        return Err(ErrorCode::PastDate);
    }

    Ok(date)
}

fn parse_decimal(raw: &str) -> Result<Decimal, ErrorCode> {
    let text = raw.trim();

    if !is_plain_number(text, true) {
        return Err(ErrorCode::InvalidNumber);
    }

    text.parse::<Decimal>().ok().ok_or(ErrorCode::OutOfRange)
}

/// Optional sign, ASCII digits, and with `allow_fraction` one `.` between digit runs.
///
/// `Decimal::from_str` skips `_` separators, so the shape is checked before parsing.
fn is_plain_number(text: &str, allow_fraction: bool) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if allow_fraction => (whole, Some(fraction)),
        Some(_) => return false,
        None => (unsigned, None),
    };

    let digits = |part: &str| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit());

    digits(whole) && fraction.is_none_or(digits)
}
