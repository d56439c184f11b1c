//! Catalog vocabularies (project/service categories, UI block sections) and
//! content validation rules for the admin write path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateUrl;

use crate::error::FieldErrors;

/// Maximum length of a project title or service name.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a standard page title.
pub const MAX_PAGE_TITLE_LENGTH: usize = 255;

/// Maximum length of a UI block key.
pub const MAX_BLOCK_KEY_LENGTH: usize = 150;

/// Maximum length of a UI block description.
pub const MAX_BLOCK_DESCRIPTION_LENGTH: usize = 255;

/// Maximum length of a link field such as a demo or repository URL.
pub const MAX_URL_LENGTH: usize = 200;

/// Schemes accepted in link fields.
const URL_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "ftps://"];

/// Digits allowed before the decimal point of a price (NUMERIC(10, 2)).
const MAX_PRICE_INTEGER_DIGITS: usize = 8;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!(
                        "Invalid {} '{}'. Must be one of: {:?}",
                        $label,
                        other,
                        [$($value),+]
                    )),
                }
            }
        }
    };
}

string_enum!(
    /// Portfolio project category.
    ProjectCategory, "project category" {
        WebDev => "web-dev",
        Marketing => "marketing",
        PetProject => "pet-project",
    }
);

string_enum!(
    /// Service offering category.
    ServiceCategory, "service category" {
        FullSite => "full-site",
        Development => "development",
        Marketing => "marketing",
    }
);

string_enum!(
    /// Site section a UI block belongs to.
    BlockSection, "section" {
        Homepage => "HOMEPAGE",
        Footer => "FOOTER",
        Global => "GLOBAL",
    }
);

/// Require a non-blank value for `field`.
pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
    }
}

/// Require `value` to be at most `max` characters.
pub fn limit_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this field has no more than {max} characters."),
        );
    }
}

/// Validate an optional link field. Absent or blank values are accepted;
/// anything else must be an absolute URL with an accepted scheme.
pub fn validate_link(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return;
    };
    let lowered = value.to_ascii_lowercase();
    let scheme_ok = URL_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme));
    if !scheme_ok || !value.validate_url() {
        errors.add(field, "Enter a valid URL.");
    }
    limit_length(errors, field, value, MAX_URL_LENGTH);
}

/// Validate a price given as a decimal string (`"1500"`, `"99.90"`).
///
/// Negative values, more than two decimal places and values that do not
/// fit NUMERIC(10, 2) are rejected.
pub fn validate_price(errors: &mut FieldErrors, price: &str) {
    let price = price.trim();
    if price.starts_with('-') {
        errors.add("price", "Price must be positive");
        return;
    }

    let (integer, fraction) = match price.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (price, None),
    };

    let digits_only = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let integer_ok = digits_only(integer) && integer.len() <= MAX_PRICE_INTEGER_DIGITS;
    let fraction_ok = fraction.map_or(true, |f| digits_only(f) && f.len() <= 2);

    if !integer_ok || !fraction_ok {
        errors.add(
            "price",
            "A valid number with at most 8 integer digits and 2 decimal places is required.",
        );
    }
}

/// Accept a price either as a JSON string (`"99.90"`) or a JSON number
/// (`99.9`), keeping it as decimal text.
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<RawPrice>::deserialize(deserializer)?.map(|raw| match raw {
            RawPrice::Text(text) => text.trim().to_string(),
            RawPrice::Number(number) => number.to_string(),
        }),
    )
}
