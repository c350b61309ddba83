use crate::models::{AppleMdm, MdmCertificate};
use crate::utils::dates::format_date;
use crate::utils::json::{as_dict, dict_at, object_items, str_field};
use serde_json::Value;

pub fn process_apple_mdm(doc: &Value) -> Option<AppleMdm> {
    let root = as_dict(doc);
    if !root.contains_key("Apple") {
        return None;
    }
    let apple = dict_at(root, "Apple");

    let certificates = object_items(apple.get("AllItems"))
        .into_iter()
        .map(|item| MdmCertificate {
            name: str_field(item, "Name"),
            cert_type: str_field(item, "Type"),
            apple_id: str_field(item, "AppleIdentifier"),
            expiration: format_date(str_field(item, "ExpirationDateTime").as_deref()),
            days_left: item.get("DaysUntilExpiry").and_then(Value::as_i64),
            status: str_field(item, "Status"),
            serial: str_field(item, "CertificateSerialNumber"),
        })
        .collect();

    Some(AppleMdm { certificates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apple_absent() {
        assert!(process_apple_mdm(&json!({})).is_none());
    }

    #[test]
    fn test_apple_present_but_empty() {
        let mdm = process_apple_mdm(&json!({ "Apple": {} })).unwrap();
        assert!(mdm.certificates.is_empty());
    }

    #[test]
    fn test_certificate_rows() {
        let doc = json!({
            "Apple": {
                "AllItems": [
                    { "Name": "MDM Push", "Type": "APNS", "AppleIdentifier": "it@contoso.com",
                      "ExpirationDateTime": "2025-10-01T00:00:00Z", "DaysUntilExpiry": 57,
                      "Status": "Active", "CertificateSerialNumber": "ABC123" },
                    "junk"
                ]
            }
        });
        let mdm = process_apple_mdm(&doc).unwrap();
        assert_eq!(mdm.certificates.len(), 1);
        assert_eq!(mdm.certificates[0].days_left, Some(57));
        assert_eq!(mdm.certificates[0].expiration, "01-10-2025 00:00");
    }
}
