use serde::Deserialize;

use crate::{
    guard::typedefs::ReceiptStatus,
    utils::de::{string_or_number, u8_from_string_or_number},
};

use super::constants::CLAIM_ID_DELIMITER;

#[derive(Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct BoostsData {
    pub boosts: Vec<Boost>,
}

impl<T> GraphQlResponse<T> {
    fn error_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl GraphQlResponse<BoostsData> {
    /// Any GraphQL error rejects the whole response, even alongside partial data.
    pub fn into_boosts(self) -> eyre::Result<Vec<Boost>> {
        if !self.errors.is_empty() {
            let messages = self.error_messages();
            if self.data.is_some() {
                tracing::warn!("Discarding partial subgraph data: {}", messages);
                eyre::bail!("Subgraph returned errors: {}", messages);
            }
            eyre::bail!("Subgraph returned no data: {}", messages);
        }

        match self.data {
            Some(data) => Ok(data.boosts),
            None => eyre::bail!("Subgraph returned no data"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "u8_from_string_or_number")]
    pub decimals: u8,
}

/// Snapshot of a boost as indexed at query time.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Boost {
    pub id: String,
    pub balance: String,
    #[serde(rename = "strategyURI")]
    pub strategy_uri: String,
    pub token: Token,
    #[serde(deserialize_with = "string_or_number")]
    pub start: String,
    #[serde(deserialize_with = "string_or_number")]
    pub end: String,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(skip)]
    pub receipt: ReceiptStatus,
}

impl Boost {
    /// First claim whose recipient matches `account`, ignoring address case.
    pub fn claim_for(&self, account: &str) -> Option<&Claim> {
        self.claims
            .iter()
            .find(|c| c.recipient.eq_ignore_ascii_case(account))
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Claim {
    pub id: String,
    pub recipient: String,
    pub amount: String,
}

impl Claim {
    /// Claim ids are `<tx hash>-<log index>`.
    pub fn tx_hash(&self) -> &str {
        self.id
            .split(CLAIM_ID_DELIMITER)
            .next()
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn boost_json() -> serde_json::Value {
        json!({
            "id": "1",
            "balance": "5000000000000000000",
            "strategyURI": "ipfs://bafkstrategy",
            "token": { "name": "Test", "symbol": "TST", "decimals": 18 },
            "start": "1650000000",
            "end": 1660000000,
            "claims": [
                { "id": "0xdeadbeef-0", "recipient": "0xAbC0000000000000000000000000000000000001", "amount": "1" },
                { "id": "0xfeedface-3", "recipient": "0xabc0000000000000000000000000000000000002", "amount": "2" }
            ]
        })
    }

    #[test]
    fn decodes_subgraph_boost() {
        let boost: Boost = serde_json::from_value(boost_json()).unwrap();

        assert_eq!(boost.strategy_uri, "ipfs://bafkstrategy");
        assert_eq!(boost.token.decimals, 18);
        assert_eq!(boost.end, "1660000000");
        assert_eq!(boost.claims.len(), 2);
        assert_eq!(boost.receipt, ReceiptStatus::NotRequested);
    }

    #[test]
    fn decodes_decimals_sent_as_string() {
        let mut value = boost_json();
        value["token"]["decimals"] = json!("6");

        let boost: Boost = serde_json::from_value(value).unwrap();

        assert_eq!(boost.token.decimals, 6);
    }

    #[test]
    fn claim_lookup_ignores_case() {
        let boost: Boost = serde_json::from_value(boost_json()).unwrap();

        let accounts = [
            ("0xabc0000000000000000000000000000000000001", Some("0xdeadbeef-0")),
            ("0XABC0000000000000000000000000000000000001", Some("0xdeadbeef-0")),
            ("0xABC0000000000000000000000000000000000002", Some("0xfeedface-3")),
            ("0xabc0000000000000000000000000000000000003", None),
            ("", None),
        ];

        for (account, expected) in accounts {
            assert_eq!(
                boost.claim_for(account).map(|c| c.id.as_str()),
                expected,
                "account {account}"
            );
        }
    }

    #[test]
    fn claim_lookup_returns_first_match() {
        let mut boost: Boost = serde_json::from_value(boost_json()).unwrap();
        boost.claims.push(Claim {
            id: "0xlater-1".to_string(),
            recipient: "0xabc0000000000000000000000000000000000001".to_string(),
            amount: "9".to_string(),
        });

        let claim = boost
            .claim_for("0xabc0000000000000000000000000000000000001")
            .unwrap();

        assert_eq!(claim.id, "0xdeadbeef-0");
    }

    #[test]
    fn errors_reject_partial_data() {
        let response: GraphQlResponse<BoostsData> = serde_json::from_value(json!({
            "data": { "boosts": [boost_json()] },
            "errors": [{ "message": "indexing_error" }]
        }))
        .unwrap();

        let err = response.into_boosts().unwrap_err();

        assert_eq!(err.to_string(), "Subgraph returned errors: indexing_error");
    }

    #[test]
    fn empty_envelope_has_no_data() {
        let response: GraphQlResponse<BoostsData> = serde_json::from_value(json!({})).unwrap();

        let err = response.into_boosts().unwrap_err();

        assert_eq!(err.to_string(), "Subgraph returned no data");
    }

    #[test]
    fn tx_hash_is_leading_id_segment() {
        let claim = Claim {
            id: "0x1234-7".to_string(),
            recipient: String::new(),
            amount: String::new(),
        };

        assert_eq!(claim.tx_hash(), "0x1234");
    }
}
