use crate::models::MfaCoverage;
use crate::utils::formatting::rate;
use crate::utils::json::{as_dict, dict_at, ordered_list, truthy};
use serde_json::Value;
use std::collections::BTreeMap;

use super::users::process_users_summary;

/// Registration-detail field name to display name, as emitted by the
/// authentication methods report.
const METHOD_FIELDS: &[(&str, &str)] = &[
    ("MicrosoftAuthenticatorApp", "Microsoft Authenticator App"),
    ("MicrosoftAuthenticatorPasswordless", "Microsoft Authenticator Passwordless"),
    ("Fido2SecurityKey", "FIDO2 Security Key"),
    ("WindowsHelloforBusiness", "Windows Hello for Business"),
    ("WindowsHelloPasskey", "Windows Hello Passkey"),
    ("SMS", "SMS"),
    ("VoiceCall", "Voice Call"),
    ("Email", "Email"),
    ("SoftwareOTP", "Software OTP"),
    ("HardwareOTP", "Hardware OTP"),
    ("TemporaryAccessPass", "Temporary Access Pass"),
    ("DeviceBoundPasskey", "Device Bound Passkey"),
    ("MicrosoftAuthenticatorPasskey", "Microsoft Authenticator Passkey"),
    ("MacOSSecureEnclaveKey", "macOS Secure Enclave Key"),
    ("AlternativeMobilePhone", "Alternative Mobile Phone"),
    ("SecurityQuestions", "Security Questions"),
];

/// Cross-references the user-detail rows to count per-method registrations.
/// The adoption rate is recomputed from the summary headcounts rather than
/// trusted from the producer; SSPR adoption has no per-user source and is
/// taken from the summary as-is.
pub fn process_mfa_coverage(doc: &Value) -> Option<MfaCoverage> {
    let summary = process_users_summary(doc)?;

    let root = as_dict(doc);
    let users = dict_at(root, "Users");

    let mut methods: BTreeMap<String, u64> = METHOD_FIELDS
        .iter()
        .map(|(_, friendly)| (friendly.to_string(), 0))
        .collect();

    for user in ordered_list(users.get("UserDetails")) {
        let Some(user) = user.as_object() else { continue };
        for (field, friendly) in METHOD_FIELDS {
            if truthy(user.get(*field)) {
                *methods.entry(friendly.to_string()).or_insert(0) += 1;
            }
        }
    }

    Some(MfaCoverage {
        adoption_rate: rate(summary.mfa_registered, summary.enabled),
        sspr_adoption_rate: summary.sspr_adoption_rate,
        methods,
        total_users: summary.enabled,
        mfa_registered: summary.mfa_registered,
    })
}
