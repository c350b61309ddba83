use serde::{Deserialize, Serialize};

/// Apple MDM push/VPP/DEP certificates and their expiry state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppleMdm {
    pub certificates: Vec<MdmCertificate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdmCertificate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub cert_type: Option<String>,
    pub apple_id: Option<String>,
    pub expiration: String,
    pub days_left: Option<i64>,
    pub status: Option<String>,
    pub serial: Option<String>,
}
