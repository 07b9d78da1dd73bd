//! Food Model
//!
//! Diet choices and allergies are free-form maps on the record, but only the
//! closed sets below are ever counted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(default)]
    pub diet: BTreeMap<String, bool>,
    #[serde(default)]
    pub allergies: BTreeMap<String, bool>,
}

/// Known diet choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietChoice {
    Vegan,
    Vegetarian,
    Fun,
}

impl DietChoice {
    pub const ALL: [DietChoice; 3] = [Self::Vegan, Self::Vegetarian, Self::Fun];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Fun => "fun",
        }
    }

    /// `None` for keys outside the known set
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Known allergies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Allergy {
    Milk,
    Eggs,
    Peanuts,
    TreeNuts,
    Fish,
    Shellfish,
    Soy,
    Wheat,
    Curare,
    Hemlock,
}

impl Allergy {
    pub const ALL: [Allergy; 10] = [
        Self::Milk,
        Self::Eggs,
        Self::Peanuts,
        Self::TreeNuts,
        Self::Fish,
        Self::Shellfish,
        Self::Soy,
        Self::Wheat,
        Self::Curare,
        Self::Hemlock,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Milk => "milk",
            Self::Eggs => "eggs",
            Self::Peanuts => "peanuts",
            Self::TreeNuts => "treeNuts",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Soy => "soy",
            Self::Wheat => "wheat",
            Self::Curare => "curare",
            Self::Hemlock => "hemlock",
        }
    }

    /// `None` for keys outside the known set
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for choice in DietChoice::ALL {
            let json = serde_json::to_string(&choice).unwrap();
            assert_eq!(json, format!("\"{}\"", choice.key()));
        }
        for allergy in Allergy::ALL {
            let json = serde_json::to_string(&allergy).unwrap();
            assert_eq!(json, format!("\"{}\"", allergy.key()));
        }
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        assert_eq!(DietChoice::from_key("vegan"), Some(DietChoice::Vegan));
        assert_eq!(DietChoice::from_key("carnivore"), None);
        assert_eq!(Allergy::from_key("treeNuts"), Some(Allergy::TreeNuts));
        assert_eq!(Allergy::from_key("tree_nuts"), None);
        assert_eq!(Allergy::from_key("gluten"), None);
    }
}
