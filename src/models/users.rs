use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headcount breakdown from `Users.Summary`. Every field defaults to zero so
/// downstream rate computations never see a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersSummary {
    pub total: u64,
    pub enabled: u64,
    pub disabled: u64,
    pub licensed: u64,
    pub unlicensed: u64,
    pub guest: u64,
    pub admin: u64,
    pub mfa_registered: u64,
    pub mfa_not_registered: u64,
    pub inactive: u64,
    pub mfa_adoption_rate: f64,
    pub sspr_adoption_rate: f64,
}

/// Per-method MFA registration coverage. `adoption_rate` is recomputed from
/// enabled users; `sspr_adoption_rate` is taken from the producer summary.
/// Both are 0-100 numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaCoverage {
    pub adoption_rate: f64,
    pub sspr_adoption_rate: f64,
    pub methods: BTreeMap<String, u64>,
    pub total_users: u64,
    pub mfa_registered: u64,
}
