//! Diet and allergy tallies

use std::collections::BTreeMap;

use serde::Serialize;
use shared::models::{Allergy, DietChoice, Rsvp};

/// Counts per known diet choice and allergy.
///
/// Every known key is always present; serialized in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodTally {
    pub diets: BTreeMap<DietChoice, u32>,
    pub allergies: BTreeMap<Allergy, u32>,
}

impl Default for FoodTally {
    fn default() -> Self {
        Self {
            diets: DietChoice::ALL.into_iter().map(|c| (c, 0)).collect(),
            allergies: Allergy::ALL.into_iter().map(|a| (a, 0)).collect(),
        }
    }
}

impl FoodTally {
    pub fn diet(&self, choice: DietChoice) -> u32 {
        self.diets.get(&choice).copied().unwrap_or(0)
    }

    pub fn allergy(&self, allergy: Allergy) -> u32 {
        self.allergies.get(&allergy).copied().unwrap_or(0)
    }
}

/// Count every truthy known key in each record's `food.diet` and
/// `food.allergies`. Unknown keys are skipped.
pub fn tally_food(rsvps: &[Rsvp]) -> FoodTally {
    let mut tally = FoodTally::default();

    for food in rsvps.iter().filter_map(|r| r.food.as_ref()) {
        for (key, _) in food.diet.iter().filter(|(_, on)| **on) {
            if let Some(count) = DietChoice::from_key(key).and_then(|c| tally.diets.get_mut(&c)) {
                *count += 1;
            }
        }
        for (key, _) in food.allergies.iter().filter(|(_, on)| **on) {
            if let Some(count) = Allergy::from_key(key).and_then(|a| tally.allergies.get_mut(&a)) {
                *count += 1;
            }
        }
    }

    tally
}
