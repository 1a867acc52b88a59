use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Error returned when a tag string does not name a known value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed set of display tags.
///
/// Parsing ignores ASCII case and surrounding whitespace, and accepts the
/// listed aliases. Serialization always emits the canonical label.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
        #[serde(try_from = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $(
                    if needle.eq_ignore_ascii_case($label) $(|| needle.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(ParseTagError { kind: $kind, value: s.to_string() })
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseTagError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

tag_enum! {
    /// Budget tier, ordered from cheapest to most expensive
    pub enum PriceTier as "price tier" {
        Free => "Free",
        Inexpensive => "$",
        Moderate => "$$",
        Expensive => "$$$",
        Luxury => "$$$$",
    }
}

tag_enum! {
    /// Category a venue belongs to
    pub enum ActivityType as "activity type" {
        Dining => "Dining",
        Culture => "Culture",
        Active => "Active",
        Entertainment => "Entertainment",
    }
}

tag_enum! {
    /// Activity choice as shown on the form.
    ///
    /// Bare category names are accepted as aliases.
    pub enum ActivityLabel as "activity" {
        FoodAndDrink => "Food & Drink" | "Dining",
        ArtsAndCulture => "Arts & Culture" | "Culture",
        OutdoorAndSports => "Outdoor & Sports" | "Active",
        Entertainment => "Entertainment",
    }
}

tag_enum! {
    pub enum TimeOfDay as "time of day" {
        Morning => "Morning",
        Noon => "Noon",
        Afternoon => "Afternoon",
        Evening => "Evening",
        LateNight => "Late Night" | "Late-Night" | "LateNight",
        Daytime => "Daytime",
        Nighttime => "Nighttime",
        Any => "Any",
    }
}

tag_enum! {
    pub enum DietaryTag as "dietary tag" {
        Vegetarian => "Vegetarian",
        Vegan => "Vegan",
        GlutenFree => "Gluten-Free" | "Gluten Free" | "GlutenFree",
        Kosher => "Kosher",
        Halal => "Halal",
    }
}

impl ActivityLabel {
    /// Venue category this form label selects
    pub fn category(self) -> ActivityType {
        match self {
            ActivityLabel::FoodAndDrink => ActivityType::Dining,
            ActivityLabel::ArtsAndCulture => ActivityType::Culture,
            ActivityLabel::OutdoorAndSports => ActivityType::Active,
            ActivityLabel::Entertainment => ActivityType::Entertainment,
        }
    }
}

impl TimeOfDay {
    /// Choices offered on the preference form
    pub const FORM_OPTIONS: &'static [TimeOfDay] = &[
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::LateNight,
        TimeOfDay::Any,
    ];
}

/// One bundled venue or activity suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueIdea {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_range: PriceTier,
    pub neighborhood: String,
    pub activity_type: ActivityType,
    pub time_of_day: Vec<TimeOfDay>,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub dietary_options: Vec<DietaryTag>,
    #[serde(default)]
    pub weather_dependent: bool,
    #[serde(default)]
    pub requires_ticket: bool,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Preferences submitted from the date finder form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserPreferences {
    #[validate(required(message = "Budget is required"))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub budget: Option<PriceTier>,
    #[validate(
        length(min = 1, message = "Please select at least one neighborhood"),
        custom(function = "no_blank_entries")
    )]
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[validate(length(min = 1, message = "Please select at least one time of day"))]
    #[serde(rename = "timeOfDay", default)]
    pub time_of_day: Vec<TimeOfDay>,
    #[validate(length(min = 1, message = "Please select at least one activity"))]
    #[serde(default)]
    pub activities: Vec<ActivityLabel>,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(rename = "dietaryRestrictions", default)]
    pub dietary_restrictions: Vec<DietaryTag>,
}

/// A blank name is a substring of every location, so it would select everything
fn no_blank_entries(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|value| value.trim().is_empty()) {
        let mut err = ValidationError::new("blank_entry");
        err.message = Some(Cow::from("Neighborhood names cannot be blank"));
        return Err(err);
    }
    Ok(())
}

/// The form posts an empty string when no budget is picked
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<PriceTier>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdFormat {
    Horizontal,
    Vertical,
}

/// Where the external ad widget is mounted on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdPlacement {
    pub slot: &'static str,
    pub format: AdFormat,
}

pub const AD_PLACEMENTS: &[AdPlacement] = &[
    AdPlacement { slot: "header-banner", format: AdFormat::Horizontal },
    AdPlacement { slot: "sidebar", format: AdFormat::Vertical },
    AdPlacement { slot: "suggestions-mid", format: AdFormat::Horizontal },
    AdPlacement { slot: "footer-banner", format: AdFormat::Horizontal },
];
