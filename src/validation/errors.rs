//! Validation Errors

use std::{
    collections::BTreeMap,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Validated form field, ordered as the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Hotel name
    Name,

    /// Location
    Location,

    /// Price per night
    PricePerNight,

    /// Available rooms
    AvailableRooms,

    /// Rating
    Rating,

    /// Check-in date
    CheckInDate,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Location => "location",
            Field::PricePerNight => "pricePerNight",
            Field::AvailableRooms => "availableRooms",
            Field::Rating => "rating",
            Field::CheckInDate => "checkInDate",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Blank or whitespace-only.
    Required,

    /// Shorter than the minimum length.
    TooShort,

    /// Not a number.
    InvalidNumber,

    /// Outside the accepted range.
    OutOfRange,

    /// Below zero.
    Negative,

    /// Not a calendar date.
    InvalidDate,

    /// Before today.
    PastDate,
}

impl ErrorCode {
    /// Stable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "REQUIRED",
            ErrorCode::TooShort => "TOO_SHORT",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::Negative => "NEGATIVE",
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::PastDate => "PAST_DATE",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A rejected field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Machine-readable reason
    pub code: ErrorCode,

    /// Message shown next to the field
    pub message: &'static str,
}

impl FieldError {
    /// Error for `field` with the form's message for `code`.
    #[must_use]
    pub const fn new(field: Field, code: ErrorCode) -> Self {
        Self {
            code,
            message: message(field, code),
        }
    }
}

const fn message(field: Field, code: ErrorCode) -> &'static str {
    match (field, code) {
        (Field::Name, ErrorCode::TooShort) => "Hotel name must be at least 3 characters",
        (Field::Name, _) => "Hotel name is required",
        (Field::Location, _) => "Location is required",
        (Field::PricePerNight, ErrorCode::OutOfRange) => {
            "Price must be greater than 0 and at most 10000"
        }
        (Field::PricePerNight, _) => "Valid price is required",
        (Field::AvailableRooms, ErrorCode::Negative) => "Rooms cannot be negative",
        (Field::AvailableRooms, ErrorCode::OutOfRange) => "Rooms must be at most 1000",
        (Field::AvailableRooms, _) => "Valid number of rooms is required",
        (Field::Rating, ErrorCode::OutOfRange) => "Rating must be between 1 and 5",
        (Field::Rating, _) => "Valid rating is required",
        (Field::CheckInDate, ErrorCode::PastDate) => "Check-in date cannot be in the past",
        (Field::CheckInDate, ErrorCode::InvalidDate) => "Check-in date must be a valid date",
        (Field::CheckInDate, _) => "Check-in date is required",
    }
}

/// Every rejected field of a draft, at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub(crate) fn insert(&mut self, field: Field, code: ErrorCode) {
        self.errors.insert(field, FieldError::new(field, code));
    }

    /// Keep the value of a passing check, recording the failure otherwise.
    pub(crate) fn check<T>(&mut self, field: Field, result: Result<T, ErrorCode>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(code) => {
                self.insert(field, code);

                None
            }
        }
    }

    /// Error recorded for `field`.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Code recorded for `field`.
    pub fn code(&self, field: Field) -> Option<ErrorCode> {
        self.get(field).map(|error| error.code)
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, (field, error)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{field}: {}", error.message)?;
        }

        Ok(())
    }
}

impl Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_fields_in_form_order() {
        let mut errors = ValidationErrors::default();

        errors.insert(Field::Rating, ErrorCode::OutOfRange);
        errors.insert(Field::Name, ErrorCode::Required);

        assert_eq!(
            errors.to_string(),
            "name: Hotel name is required; rating: Rating must be between 1 and 5"
        );
    }

    #[test]
    fn later_insert_replaces_earlier_error() {
        let mut errors = ValidationErrors::default();

        errors.insert(Field::Name, ErrorCode::Required);
        errors.insert(Field::Name, ErrorCode::TooShort);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.code(Field::Name), Some(ErrorCode::TooShort));
    }
}
