// Static self-care and emergency-number reference material

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::helplines::HelplineDirectory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfCare {
    pub breathing: String,
    pub grounding: String,
    pub movement: String,
    pub connection: String,
}

impl Default for SelfCare {
    fn default() -> Self {
        Self {
            breathing: "4-7-8 technique: Inhale 4 sec, hold 7 sec, exhale 8 sec".to_string(),
            grounding: "5-4-3-2-1: Name 5 things you see, 4 you feel, 3 you hear, 2 you smell, 1 you taste"
                .to_string(),
            movement: "Walk for 10 minutes or do simple stretches".to_string(),
            connection: "Text or call one person who cares about you".to_string(),
        }
    }
}

/// Region name -> service name -> number
pub type EmergencyNumbers = BTreeMap<String, BTreeMap<String, String>>;

pub fn default_emergency_numbers() -> EmergencyNumbers {
    let all_india = [
        ("Police", "100"),
        ("Ambulance", "108"),
        ("Fire", "101"),
        ("Disaster", "1078"),
        ("Women Helpline", "1091"),
    ]
    .into_iter()
    .map(|(service, number)| (service.to_string(), number.to_string()))
    .collect();

    BTreeMap::from([("All India".to_string(), all_india)])
}

/// Everything served by `GET /resources`, independent of classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceListing {
    pub helplines: HelplineDirectory,
    pub self_care: SelfCare,
    pub emergency_numbers: EmergencyNumbers,
}
