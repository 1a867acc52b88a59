use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::models::VenueIdea;

/// Venue list compiled into the binary
const BUNDLED_VENUES: &str = include_str!("../../data/venues.toml");

/// Neighborhoods the form always offers, in display order
pub const FORM_NEIGHBORHOODS: &[&str] = &[
    "Manhattan - Upper East Side",
    "Manhattan - Upper West Side",
    "Manhattan - Midtown",
    "Manhattan - Lower East Side",
    "Manhattan - West Village",
    "Manhattan - East Village",
    "Brooklyn - Williamsburg",
    "Brooklyn - DUMBO",
    "Brooklyn - Park Slope",
];

/// Errors that can occur while loading the venue catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate venue id: {0}")]
    DuplicateId(String),

    #[error("Venue {0} has no time of day")]
    MissingTimeOfDay(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "venue", default)]
    venues: Vec<VenueIdea>,
}

/// Read-only venue dataset shared by every request.
///
/// Cloning is cheap; all clones point at the same venues.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Arc<[VenueIdea]>,
}

impl Catalog {
    /// Load the catalog compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml(BUNDLED_VENUES)
    }

    /// Load from `path` when given, otherwise fall back to the bundled list
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_toml(&source)
            }
            None => Self::bundled(),
        }
    }

    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_venues(file.venues)
    }

    pub fn from_venues(venues: Vec<VenueIdea>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(venues.len());
        for venue in &venues {
            if !seen.insert(venue.id.as_str()) {
                return Err(CatalogError::DuplicateId(venue.id.clone()));
            }
            if venue.time_of_day.is_empty() {
                return Err(CatalogError::MissingTimeOfDay(venue.id.clone()));
            }
        }

        Ok(Self {
            venues: venues.into(),
        })
    }

    pub fn venues(&self) -> &[VenueIdea] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&VenueIdea> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// Form neighborhoods followed by any catalog neighborhood not already listed
    pub fn form_neighborhoods(&self) -> Vec<String> {
        let mut neighborhoods: Vec<String> =
            FORM_NEIGHBORHOODS.iter().map(|n| n.to_string()).collect();

        for venue in self.venues.iter() {
            let known = neighborhoods
                .iter()
                .any(|n| n.eq_ignore_ascii_case(&venue.neighborhood));
            if !known {
                neighborhoods.push(venue.neighborhood.clone());
            }
        }

        neighborhoods
    }
}
