use lazy_static::lazy_static;
use regex::Regex;

use crate::app::resource::User;
use crate::error::resource::{
    LengthParams, ValidationError, ValidationErrorKind, JSON_FIELD_PREFIX,
};

const FIRST_NAME_FIELD: &str = "first_name";
const LAST_NAME_FIELD: &str = "last_name";
const EMAIL_FIELD: &str = "email";
const COUNTRY_FIELD: &str = "country";

const NAME_MIN_CHARS: u32 = 2;
const NAME_MAX_CHARS: u32 = 30;
const EMAIL_MAX_CHARS: u32 = 120;

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^[\w'\-,.][^0-9_!¡?÷¿/\\+=@#$%ˆ&*(){}|~<>;:\[\]]*$")
            .expect("Expect a valid name regex");
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$")
        .expect("Expect a valid email regex");
    static ref COUNTRY_PATTERN: Regex =
        Regex::new(r"^[A-Z]{2}$").expect("Expect a valid country code regex");
}

/// Field-level validation of a candidate user resource.
pub trait ValidateUser: Send + Sync {
    /// Check every field, collecting at most one error per field in field
    /// order: first name, last name, email, country.
    fn validate(&self, resource: &User) -> Vec<ValidationError>;
}

pub struct UserValidator;

impl ValidateUser for UserValidator {
    fn validate(&self, resource: &User) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        validate_name_field(&resource.first_name, FIRST_NAME_FIELD, &mut errors);
        validate_name_field(&resource.last_name, LAST_NAME_FIELD, &mut errors);
        validate_email(&resource.email, &mut errors);
        validate_country(&resource.country, &mut errors);

        errors
    }
}

fn field_path(field: &str) -> String {
    format!("{JSON_FIELD_PREFIX}{field}")
}

fn validate_name_field(name: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if name.is_empty() {
        errors.push(ValidationError::new(
            field_path(field),
            ValidationErrorKind::MandatoryElementMissing,
        ));
    } else if name.len() < NAME_MIN_CHARS as usize || name.len() > NAME_MAX_CHARS as usize {
        errors.push(ValidationError::with_params(
            field_path(field),
            ValidationErrorKind::InvalidLength,
            LengthParams::range(NAME_MIN_CHARS, NAME_MAX_CHARS),
        ));
    } else if !NAME_PATTERN.is_match(name) {
        errors.push(ValidationError::new(
            field_path(field),
            ValidationErrorKind::InvalidCharacters,
        ));
    }
}

fn validate_email(email: &str, errors: &mut Vec<ValidationError>) {
    if email.is_empty() {
        errors.push(ValidationError::new(
            field_path(EMAIL_FIELD),
            ValidationErrorKind::MandatoryElementMissing,
        ));
    } else if email.len() > EMAIL_MAX_CHARS as usize {
        errors.push(ValidationError::with_params(
            field_path(EMAIL_FIELD),
            ValidationErrorKind::InvalidLength,
            LengthParams::max(EMAIL_MAX_CHARS),
        ));
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(ValidationError::new(
            field_path(EMAIL_FIELD),
            ValidationErrorKind::InvalidFormat,
        ));
    }
}

fn validate_country(country: &str, errors: &mut Vec<ValidationError>) {
    if country.is_empty() {
        errors.push(ValidationError::new(
            field_path(COUNTRY_FIELD),
            ValidationErrorKind::MandatoryElementMissing,
        ));
    } else if !COUNTRY_PATTERN.is_match(country) {
        // TODO: check against the ISO 3166 list instead of only the shape
        errors.push(ValidationError::new(
            field_path(COUNTRY_FIELD),
            ValidationErrorKind::InvalidCountryCode,
        ));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_resource() -> User {
        User {
            id: String::new(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "user@mail.com".into(),
            country: "GB".into(),
        }
    }

    #[test]
    fn accepts_a_valid_resource() {
        assert_eq!(UserValidator.validate(&valid_resource()), vec![]);
    }

    #[test]
    fn accepts_punctuated_names() {
        let mut resource = valid_resource();
        resource.first_name = "O'Connor".into();
        resource.last_name = "Smith-Jones".into();

        assert_eq!(UserValidator.validate(&resource), vec![]);
    }

    #[test]
    fn rejects_empty_mandatory_fields() {
        let resource = User {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country: String::new(),
        };

        let errors = UserValidator.validate(&resource);

        assert_eq!(
            errors,
            vec![
                ValidationError::new(
                    "$.first_name",
                    ValidationErrorKind::MandatoryElementMissing
                ),
                ValidationError::new("$.last_name", ValidationErrorKind::MandatoryElementMissing),
                ValidationError::new("$.email", ValidationErrorKind::MandatoryElementMissing),
                ValidationError::new("$.country", ValidationErrorKind::MandatoryElementMissing),
            ]
        );
    }

    #[test]
    fn rejects_a_short_first_name() {
        let mut resource = valid_resource();
        resource.first_name = "a".into();

        assert_eq!(
            UserValidator.validate(&resource),
            vec![ValidationError::with_params(
                "$.first_name",
                ValidationErrorKind::InvalidLength,
                LengthParams::range(2, 30),
            )]
        );
    }

    #[test]
    fn rejects_an_overlong_last_name() {
        let mut resource = valid_resource();
        resource.last_name = "a".repeat(31);

        assert_eq!(
            UserValidator.validate(&resource),
            vec![ValidationError::with_params(
                "$.last_name",
                ValidationErrorKind::InvalidLength,
                LengthParams::range(2, 30),
            )]
        );
    }

    #[test]
    fn accepts_names_at_the_length_bounds() {
        let mut resource = valid_resource();
        resource.first_name = "Jo".into();
        resource.last_name = "a".repeat(30);

        assert_eq!(UserValidator.validate(&resource), vec![]);
    }

    #[test]
    fn rejects_a_name_containing_digits() {
        let mut resource = valid_resource();
        resource.last_name = "Sm1th".into();

        assert_eq!(
            UserValidator.validate(&resource),
            vec![ValidationError::new(
                "$.last_name",
                ValidationErrorKind::InvalidCharacters
            )]
        );
    }

    #[test]
    fn rejects_a_name_containing_symbols() {
        let mut resource = valid_resource();
        resource.first_name = "Jo@n".into();

        assert_eq!(
            UserValidator.validate(&resource),
            vec![ValidationError::new(
                "$.first_name",
                ValidationErrorKind::InvalidCharacters
            )]
        );
    }

    #[test]
    fn rejects_an_overlong_email() {
        let mut resource = valid_resource();
        resource.email = format!("{}@mail.com", "a".repeat(120));

        assert_eq!(
            UserValidator.validate(&resource),
            vec![ValidationError::with_params(
                "$.email",
                ValidationErrorKind::InvalidLength,
                LengthParams::max(120),
            )]
        );
    }

    #[test]
    fn rejects_a_malformed_email() {
        for email in ["usermail.com", "user@mail", "user@mail.topleveldomain"] {
            let mut resource = valid_resource();
            resource.email = email.into();

            assert_eq!(
                UserValidator.validate(&resource),
                vec![ValidationError::new(
                    "$.email",
                    ValidationErrorKind::InvalidFormat
                )],
                "email: {email}"
            );
        }
    }

    #[test]
    fn rejects_a_bad_country_code() {
        for country in ["gb", "GBR", "G1", "G"] {
            let mut resource = valid_resource();
            resource.country = country.into();

            assert_eq!(
                UserValidator.validate(&resource),
                vec![ValidationError::new(
                    "$.country",
                    ValidationErrorKind::InvalidCountryCode
                )],
                "country: {country}"
            );
        }
    }

    #[test]
    fn collects_one_error_per_invalid_field_in_field_order() {
        let resource = User {
            id: String::new(),
            first_name: "a".into(),
            last_name: "Sm1th".into(),
            email: "usermail.com".into(),
            country: "gbr".into(),
        };

        let errors = UserValidator.validate(&resource);

        assert_eq!(
            errors
                .iter()
                .map(|e| (e.field.as_str(), e.error))
                .collect::<Vec<_>>(),
            vec![
                ("$.first_name", ValidationErrorKind::InvalidLength),
                ("$.last_name", ValidationErrorKind::InvalidCharacters),
                ("$.email", ValidationErrorKind::InvalidFormat),
                ("$.country", ValidationErrorKind::InvalidCountryCode),
            ]
        );
    }
}
