//! Product validation rules.

use validator::Validate;

use crate::error::CoreError;

/// Message returned when a product is saved without a name.
pub const NAME_REQUIRED: &str = "name is required";

#[derive(Debug, Validate)]
struct ProductFields {
    #[validate(length(min = 1, message = "name is required"))]
    name: String,
}

/// Validate a product name before it is written: the name must be non-empty.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    let fields = ProductFields {
        name: name.to_owned(),
    };

    fields.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| errors.iter())
            .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
            .unwrap_or_else(|| NAME_REQUIRED.to_string());
        CoreError::Validation(message)
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn non_empty_name_is_valid() {
        assert!(validate_product_name("tempname").is_ok());
    }

    #[test]
    fn single_character_name_is_valid() {
        assert!(validate_product_name("x").is_ok());
    }

    #[test]
    fn whitespace_name_is_valid() {
        // Only emptiness is checked; whitespace is stored as given.
        assert!(validate_product_name(" ").is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_matches!(
            validate_product_name(""),
            Err(CoreError::Validation(msg)) if msg == NAME_REQUIRED
        );
    }
}
