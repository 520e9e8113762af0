//! Service Catalog
//!
//! The fixed set of editing services offered on the site. Both the pricing
//! endpoint and the browser fallback read from [`Catalog::standard`].

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{CoreError, Result};
use crate::money;

pub const BASIC_EDIT: &str = "basic-edit";
pub const ADVANCED_EDIT: &str = "advanced-edit";
pub const PREMIUM_EDIT: &str = "premium-edit";
pub const MOTION_GRAPHICS: &str = "motion-graphics";
pub const CONSULTATION: &str = "consultation";

/// A purchasable editing service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Display name
    pub name: String,

    /// One-line description
    pub description: String,

    /// Price in cents
    pub price: i64,

    /// Turnaround, as shown to the visitor
    pub duration: String,
}

impl ServiceOffering {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            duration: duration.into(),
        }
    }

    /// Price formatted as dollars with two decimals (no currency sign)
    pub fn display_price(&self) -> String {
        money::format_cents(self.price)
    }
}

/// Ordered mapping of service key to offering.
///
/// Serializes as a JSON object whose key order follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, ServiceOffering)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five services the studio sells
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            BASIC_EDIT,
            ServiceOffering::new(
                "Basic Video Edit",
                "Cut, trim, and basic color correction",
                2500,
                "1-2 business days",
            ),
        );
        catalog.insert(
            ADVANCED_EDIT,
            ServiceOffering::new(
                "Advanced Video Edit",
                "Professional editing with effects, transitions, and audio mixing",
                7500,
                "3-5 business days",
            ),
        );
        catalog.insert(
            PREMIUM_EDIT,
            ServiceOffering::new(
                "Premium Video Edit",
                "Complete production with motion graphics, custom animations",
                15000,
                "1-2 weeks",
            ),
        );
        catalog.insert(
            MOTION_GRAPHICS,
            ServiceOffering::new(
                "Motion Graphics Package",
                "Custom motion graphics and animations",
                10000,
                "1 week",
            ),
        );
        catalog.insert(
            CONSULTATION,
            ServiceOffering::new(
                "Video Strategy Consultation",
                "1-hour consultation for video production planning",
                5000,
                "1 hour session",
            ),
        );
        catalog
    }

    /// Insert or replace an offering. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, offering: ServiceOffering) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = offering;
        } else {
            self.entries.push((key, offering));
        }
    }

    pub fn get(&self, key: &str) -> Option<&ServiceOffering> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, offering)| offering)
    }

    /// Look up an offering, failing on unknown keys
    pub fn require(&self, key: &str) -> Result<&ServiceOffering> {
        self.get(key)
            .ok_or_else(|| CoreError::UnknownService(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceOffering)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, offering) in &self.entries {
            map.serialize_entry(key, offering)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of service key to service offering")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Catalog, A::Error> {
        let mut catalog = Catalog::new();
        while let Some((key, offering)) = access.next_entry::<String, ServiceOffering>()? {
            catalog.insert(key, offering);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_keys_in_order() {
        let catalog = Catalog::standard();
        let keys: Vec<_> = catalog.keys().collect();
        assert_eq!(
            keys,
            vec![BASIC_EDIT, ADVANCED_EDIT, PREMIUM_EDIT, MOTION_GRAPHICS, CONSULTATION]
        );
    }

    #[test]
    fn test_standard_prices() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get(BASIC_EDIT).unwrap().price, 2500);
        assert_eq!(catalog.get(ADVANCED_EDIT).unwrap().price, 7500);
        assert_eq!(catalog.get(PREMIUM_EDIT).unwrap().price, 15000);
        assert_eq!(catalog.get(MOTION_GRAPHICS).unwrap().price, 10000);
        assert_eq!(catalog.get(CONSULTATION).unwrap().price, 5000);
    }

    #[test]
    fn test_require_unknown_service() {
        let catalog = Catalog::standard();
        let err = catalog.require("color-grading").unwrap_err();
        assert_eq!(err, CoreError::UnknownService("color-grading".into()));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = Catalog::standard();
        catalog.insert(
            BASIC_EDIT,
            ServiceOffering::new("Basic", "Trim only", 2000, "1 day"),
        );
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.keys().next(), Some(BASIC_EDIT));
        assert_eq!(catalog.get(BASIC_EDIT).unwrap().price, 2000);
    }

    #[test]
    fn test_json_preserves_order() {
        let json = serde_json::to_string(&Catalog::standard()).unwrap();
        let basic = json.find("\"basic-edit\"").unwrap();
        let consultation = json.find("\"consultation\"").unwrap();
        assert!(basic < consultation);

        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Catalog::standard());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(Catalog::standard()).unwrap();
        let basic = &value["basic-edit"];
        assert_eq!(basic["name"], "Basic Video Edit");
        assert_eq!(basic["price"], 2500);
        assert_eq!(basic["duration"], "1-2 business days");
    }
}
