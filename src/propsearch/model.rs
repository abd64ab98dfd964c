//! Core listing types.
//!
//! A [`Property`] is created once from the catalog file and never mutated
//! afterwards. Field names follow the catalog JSON (`type`, `added`, ...), so
//! the same structs read the catalog and write the favorites slot.

use crate::error::{PropsearchError, Result};
use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Flat,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::House => write!(f, "House"),
            PropertyType::Flat => write!(f, "Flat"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = PropsearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "flat" => Ok(PropertyType::Flat),
            other => Err(PropsearchError::Api(format!(
                "Unknown property type '{}' (expected House or Flat)",
                other
            ))),
        }
    }
}

/// The listing date as it appears in the catalog: `{"month": "October", "day": 12, "year": 2022}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Added {
    pub month: String,
    pub day: u32,
    pub year: i32,
}

impl Added {
    /// Reconstructs the calendar date. The month accepts full or abbreviated
    /// English names in any case. Returns `None` for impossible dates.
    pub fn date(&self) -> Option<NaiveDate> {
        let month = Month::from_str(self.month.trim()).ok()?;
        NaiveDate::from_ymd_opt(self.year, month.number_from_month(), self.day)
    }
}

impl From<NaiveDate> for Added {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        let month = Month::try_from(date.month() as u8)
            .map(|m| m.name().to_string())
            .unwrap_or_default();
        Self {
            month,
            day: date.day(),
            year: date.year(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub price: u32,
    #[serde(default)]
    pub tenure: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub picture: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub added: Added,
}

impl Property {
    /// Description with `<br>` markup flattened to spaces, for one-line cards.
    pub fn summary(&self) -> String {
        let mut text = self.description.clone();
        for tag in ["<br/>", "<br />", "<br>"] {
            text = text.replace(tag, " ");
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Description with `<br>` markup turned into line breaks, for the detail view.
    pub fn description_lines(&self) -> Vec<String> {
        let mut text = self.description.clone();
        for tag in ["<br/>", "<br />"] {
            text = text.replace(tag, "<br>");
        }
        text.split("<br>")
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Every picture of the listing, the card picture first.
    pub fn gallery(&self) -> Vec<&str> {
        let mut all = vec![self.picture.as_str()];
        all.extend(
            self.images
                .iter()
                .map(String::as_str)
                .filter(|img| *img != self.picture),
        );
        all
    }

    pub fn added_date(&self) -> Option<NaiveDate> {
        self.added.date()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a minimal property; tests override the fields they care about.
    pub fn property(id: &str, property_type: PropertyType, price: u32, bedrooms: u32) -> Property {
        Property {
            id: id.to_string(),
            property_type,
            bedrooms,
            price,
            tenure: "Freehold".to_string(),
            description: format!("Listing {}", id),
            location: "Orpington".to_string(),
            picture: format!("images/{}.jpg", id),
            images: Vec::new(),
            url: None,
            added: Added {
                month: "January".to_string(),
                day: 1,
                year: 2023,
            },
        }
    }

    pub fn property_at(id: &str, location: &str) -> Property {
        let mut p = property(id, PropertyType::House, 250_000, 3);
        p.location = location.to_string();
        p
    }

    pub fn property_added(id: &str, month: &str, day: u32, year: i32) -> Property {
        let mut p = property(id, PropertyType::House, 250_000, 3);
        p.added = Added {
            month: month.to_string(),
            day,
            year,
        };
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_date_parses_month_names() {
        let added = Added {
            month: "October".to_string(),
            day: 12,
            year: 2022,
        };
        assert_eq!(added.date(), NaiveDate::from_ymd_opt(2022, 10, 12));

        let short = Added {
            month: "feb".to_string(),
            day: 3,
            year: 2021,
        };
        assert_eq!(short.date(), NaiveDate::from_ymd_opt(2021, 2, 3));
    }

    #[test]
    fn added_date_does_not_depend_on_a_fixed_year() {
        // 29 February only exists in leap years
        let leap = Added {
            month: "February".to_string(),
            day: 29,
            year: 2024,
        };
        assert_eq!(leap.date(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let not_leap = Added {
            month: "February".to_string(),
            day: 29,
            year: 2023,
        };
        assert_eq!(not_leap.date(), None);
    }

    #[test]
    fn added_date_rejects_unknown_month() {
        let added = Added {
            month: "Smarch".to_string(),
            day: 1,
            year: 2022,
        };
        assert_eq!(added.date(), None);
    }

    #[test]
    fn added_from_date_uses_full_month_name() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        let added = Added::from(date);
        assert_eq!(added.month, "July");
        assert_eq!(added.date(), Some(date));
    }

    #[test]
    fn property_uses_catalog_field_names() {
        let json = r#"{
            "id": "prop1",
            "type": "House",
            "bedrooms": 3,
            "price": 750000,
            "tenure": "Freehold",
            "description": "Attractive<br>three bedroom",
            "location": "Petts Wood Road, Orpington BR5",
            "picture": "images/prop1pic1small.jpg",
            "url": "properties/prop1.html",
            "added": {"month": "October", "day": 12, "year": 2022}
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, PropertyType::House);
        assert_eq!(property.summary(), "Attractive three bedroom");
        assert_eq!(
            property.description_lines(),
            vec!["Attractive", "three bedroom"]
        );

        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["type"], "House");
        assert!(back.get("images").is_none());
    }

    #[test]
    fn gallery_starts_with_card_picture() {
        let mut p = fixtures::property("1", PropertyType::Flat, 100_000, 1);
        p.images = vec!["images/1.jpg".into(), "images/1b.jpg".into()];
        assert_eq!(p.gallery(), vec!["images/1.jpg", "images/1b.jpg"]);
    }

    #[test]
    fn property_type_parses_case_insensitively() {
        assert_eq!("flat".parse::<PropertyType>().unwrap(), PropertyType::Flat);
        assert_eq!(" HOUSE ".parse::<PropertyType>().unwrap(), PropertyType::House);
        assert!("bungalow".parse::<PropertyType>().is_err());
    }
}
