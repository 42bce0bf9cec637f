//! Zefix firm search response types.

use serde::Deserialize;
use serde_json::Value;

/// Raw response from the Zefix firm search.
///
/// Only `list` is read. Its entries stay as raw JSON and are decoded one by
/// one during match resolution.
#[derive(Debug, Deserialize)]
pub struct ZefixApiResponse {
    #[serde(default)]
    pub list: Option<Vec<Value>>,
}

impl ZefixApiResponse {
    /// Candidate entries in registry order; empty if `list` is absent.
    pub fn into_candidates(self) -> Vec<Value> {
        self.list.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "list": [
            {
                "name": "Acme AG",
                "ehraid": 123456,
                "uid": "CHE-101.202.303",
                "uidFormatted": "CHE-101.202.303",
                "chid": "CH02030012345",
                "legalSeat": "Zürich",
                "registryOfCommerceId": 20,
                "legalFormId": 3,
                "status": "EXISTIEREND",
                "cantonalExcerptWeb": "https://zh.chregister.ch/cr-portal/auszug/auszug.xhtml?uid=CHE-101.202.303"
            },
            {
                "name": "Acme AG in Liquidation",
                "uid": "CHE-404.505.606",
                "cantonalExcerptWeb": "https://be.chregister.ch/cr-portal/auszug/auszug.xhtml?uid=CHE-404.505.606"
            }
        ],
        "hasMoreResults": false
    }"#;

    #[test]
    fn test_deserialize_zefix_response() {
        let response: ZefixApiResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        let candidates = response.into_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0]["name"], "Acme AG");
        assert_eq!(candidates[1]["uid"], "CHE-404.505.606");
    }

    #[test]
    fn test_missing_list() {
        let response: ZefixApiResponse = serde_json::from_str(r#"{"hasMoreResults": false}"#).unwrap();
        assert!(response.into_candidates().is_empty());

        let response: ZefixApiResponse = serde_json::from_str(r#"{"list": null}"#).unwrap();
        assert!(response.into_candidates().is_empty());
    }

    #[test]
    fn test_entries_are_not_validated_here() {
        let response: ZefixApiResponse = serde_json::from_str(r#"{"list": [1, "two", {"name": "Three"}]}"#).unwrap();
        assert_eq!(response.into_candidates().len(), 3);
    }

    #[test]
    fn test_list_of_wrong_type_is_an_error() {
        assert!(serde_json::from_str::<ZefixApiResponse>(r#"{"list": "nope"}"#).is_err());
    }
}
