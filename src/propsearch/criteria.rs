//! Search criteria and the reducer that edits them.
//!
//! Every edit goes through [`SearchCriteria::apply`] as a [`CriteriaUpdate`].
//! An edit that would leave a lower bound above its upper bound is rejected
//! and the criteria keeps its previous value.

use crate::model::{Property, PropertyType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    #[serde(
        rename = "type",
        deserialize_with = "blank::property_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<PropertyType>,
    #[serde(deserialize_with = "blank::location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<u32>,
    #[serde(with = "iso_date", skip_serializing_if = "Option::is_none")]
    pub date_after: Option<NaiveDate>,
    #[serde(with = "iso_date", skip_serializing_if = "Option::is_none")]
    pub date_before: Option<NaiveDate>,
}

/// A single edit to the criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaUpdate {
    SetType(Option<PropertyType>),
    SetLocation(Option<String>),
    SetPriceRange { min: Option<u32>, max: Option<u32> },
    SetMinPrice(Option<u32>),
    SetMaxPrice(Option<u32>),
    SetBedroomRange { min: Option<u32>, max: Option<u32> },
    SetMinBedrooms(Option<u32>),
    SetMaxBedrooms(Option<u32>),
    SetDateRange {
        after: Option<NaiveDate>,
        before: Option<NaiveDate>,
    },
    Reset,
}

fn ordered<T: PartialOrd>(min: Option<T>, max: Option<T>) -> bool {
    match (min, max) {
        (Some(min), Some(max)) => min <= max,
        _ => true,
    }
}

impl SearchCriteria {
    /// Applies an edit. Returns `false`, leaving `self` untouched, when the
    /// edit would break a min <= max bound.
    pub fn apply(&mut self, update: CriteriaUpdate) -> bool {
        let mut next = self.clone();
        match update {
            CriteriaUpdate::SetType(t) => next.property_type = t,
            CriteriaUpdate::SetLocation(location) => {
                next.location = location
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty());
            }
            CriteriaUpdate::SetPriceRange { min, max } => {
                next.min_price = min;
                next.max_price = max;
            }
            CriteriaUpdate::SetMinPrice(min) => next.min_price = min,
            CriteriaUpdate::SetMaxPrice(max) => next.max_price = max,
            CriteriaUpdate::SetBedroomRange { min, max } => {
                next.min_bedrooms = min;
                next.max_bedrooms = max;
            }
            CriteriaUpdate::SetMinBedrooms(min) => next.min_bedrooms = min,
            CriteriaUpdate::SetMaxBedrooms(max) => next.max_bedrooms = max,
            CriteriaUpdate::SetDateRange { after, before } => {
                next.date_after = after;
                next.date_before = before;
            }
            CriteriaUpdate::Reset => next = SearchCriteria::default(),
        }

        if !next.is_valid() {
            debug!(?next, "rejected criteria edit, bounds out of order");
            return false;
        }
        *self = next;
        true
    }

    /// Builder-style [`apply`](Self::apply) that ignores rejected edits.
    pub fn with(mut self, update: CriteriaUpdate) -> Self {
        self.apply(update);
        self
    }

    pub fn is_valid(&self) -> bool {
        ordered(self.min_price, self.max_price)
            && ordered(self.min_bedrooms, self.max_bedrooms)
            && ordered(self.date_after, self.date_before)
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }

    /// Number of filter groups in use: type, location, price, bedrooms, dates.
    pub fn active_filters(&self) -> usize {
        [
            self.property_type.is_some(),
            self.location.as_deref().is_some_and(|l| !l.is_empty()),
            self.min_price.is_some() || self.max_price.is_some(),
            self.min_bedrooms.is_some() || self.max_bedrooms.is_some(),
            self.date_after.is_some() || self.date_before.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// True when the property satisfies every constraint that is set.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(t) = self.property_type {
            if property.property_type != t {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_bedrooms {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(max) = self.max_bedrooms {
            if property.bedrooms > max {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            if property.location != location {
                return false;
            }
        }
        if self.date_after.is_some() || self.date_before.is_some() {
            // Catalog loading rejects unreadable dates; anything else cannot satisfy a date bound.
            let Some(added) = property.added_date() else {
                return false;
            };
            if self.date_after.is_some_and(|after| added < after) {
                return false;
            }
            if self.date_before.is_some_and(|before| added > before) {
                return false;
            }
        }
        true
    }
}

/// Stored form state writes `""` for "any"; read it as no constraint.
mod blank {
    use crate::model::PropertyType;
    use serde::{Deserialize, Deserializer};

    fn non_blank<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<String>::deserialize(d)?
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty()))
    }

    pub fn location<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        non_blank(d)
    }

    pub fn property_type<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<PropertyType>, D::Error> {
        non_blank(d)?
            .map(|raw| raw.parse().map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// `YYYY-MM-DD` on write; on read, also accepts a full ISO timestamp,
/// taken as the calendar day in local time.
mod iso_date {
    use chrono::{DateTime, Local, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&date.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(date) = NaiveDate::parse_from_str(&raw, FORMAT) {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Some(dt.with_timezone(&Local).date_naive()))
            .map_err(serde::de::Error::custom)
    }
}
