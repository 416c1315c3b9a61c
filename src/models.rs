use serde::{Deserialize, Serialize};

/// A transaction as returned by the indexer. Only `tx-type` and `sender`
/// feed the block analysis; the remaining fields are carried through for
/// display. Absent labels deserialize to the empty string rather than being
/// dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "tx-type", default)]
    pub tx_type: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub fee: u64,
    #[serde(rename = "first-valid", skip_serializing_if = "Option::is_none")]
    pub first_valid: Option<u64>,
    #[serde(rename = "last-valid", skip_serializing_if = "Option::is_none")]
    pub last_valid: Option<u64>,
    #[serde(rename = "confirmed-round", skip_serializing_if = "Option::is_none")]
    pub confirmed_round: Option<u64>,
    #[serde(rename = "round-time", skip_serializing_if = "Option::is_none")]
    pub round_time: Option<i64>,
    #[serde(rename = "intra-round-offset", skip_serializing_if = "Option::is_none")]
    pub intra_round_offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "genesis-id", skip_serializing_if = "Option::is_none")]
    pub genesis_id: Option<String>,
    #[serde(rename = "genesis-hash", skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
    #[serde(
        rename = "application-transaction",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_transaction: Option<ApplicationTransaction>,
    #[serde(rename = "global-state-delta", skip_serializing_if = "Option::is_none")]
    pub global_state_delta: Option<Vec<GlobalStateDelta>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<TransactionSignature>,
    #[serde(rename = "sender-rewards", skip_serializing_if = "Option::is_none")]
    pub sender_rewards: Option<u64>,
    #[serde(rename = "receiver-rewards", skip_serializing_if = "Option::is_none")]
    pub receiver_rewards: Option<u64>,
    #[serde(rename = "close-rewards", skip_serializing_if = "Option::is_none")]
    pub close_rewards: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationTransaction {
    #[serde(rename = "application-id", default)]
    pub application_id: u64,
    #[serde(rename = "on-completion", default)]
    pub on_completion: String,
    #[serde(rename = "application-args", default)]
    pub application_args: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(rename = "foreign-apps", default)]
    pub foreign_apps: Vec<u64>,
    #[serde(rename = "foreign-assets", default)]
    pub foreign_assets: Vec<u64>,
    #[serde(rename = "global-state-schema", skip_serializing_if = "Option::is_none")]
    pub global_state_schema: Option<StateSchema>,
    #[serde(rename = "local-state-schema", skip_serializing_if = "Option::is_none")]
    pub local_state_schema: Option<StateSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSchema {
    #[serde(rename = "num-byte-slice", default)]
    pub num_byte_slice: u64,
    #[serde(rename = "num-uint", default)]
    pub num_uint: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalStateDelta {
    pub key: String,
    pub value: StateValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateValue {
    #[serde(default)]
    pub action: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uint: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSignature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

/// Envelope for `GET /v2/transactions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(rename = "current-round")]
    pub current_round: u64,
    pub transaction: Transaction,
}

/// Envelope for `GET /v2/transactions?limit=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionList {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub round: u64,
    pub timestamp: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "txn-counter", skip_serializing_if = "Option::is_none")]
    pub txn_counter: Option<u64>,
    #[serde(rename = "genesis-id", default)]
    pub genesis_id: String,
    #[serde(rename = "genesis-hash", default)]
    pub genesis_hash: String,
    #[serde(rename = "previous-block-hash", default)]
    pub previous_block_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetParams {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub reserve: String,
    #[serde(default)]
    pub freeze: String,
    #[serde(default)]
    pub clawback: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "unit-name", default)]
    pub unit_name: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub decimals: u32,
    #[serde(rename = "default-frozen", default)]
    pub default_frozen: bool,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub index: u64,
    #[serde(rename = "created-at-round", skip_serializing_if = "Option::is_none")]
    pub created_at_round: Option<u64>,
    #[serde(default)]
    pub deleted: bool,
    pub params: AssetParams,
}

/// Envelope for `GET /v2/assets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    #[serde(rename = "current-round")]
    pub current_round: u64,
    pub asset: Asset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_deserializes_kebab_case_fields() {
        let raw = r#"{
            "id": "TXID1",
            "tx-type": "appl",
            "sender": "SENDERADDR",
            "fee": 1000,
            "confirmed-round": 123,
            "round-time": 1700000000,
            "application-transaction": {
                "application-id": 42,
                "on-completion": "noop",
                "application-args": ["YQ=="]
            }
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.tx_type, "appl");
        assert_eq!(tx.sender, "SENDERADDR");
        assert_eq!(tx.confirmed_round, Some(123));
        let app = tx.application_transaction.unwrap();
        assert_eq!(app.application_id, 42);
        assert_eq!(app.on_completion, "noop");
    }

    #[test]
    fn transaction_missing_type_and_sender_defaults_to_empty() {
        let tx: Transaction = serde_json::from_str(r#"{"id": "X", "fee": 0}"#).unwrap();
        assert_eq!(tx.tx_type, "");
        assert_eq!(tx.sender, "");
    }

    #[test]
    fn block_tolerates_unknown_fields_and_missing_txns() {
        let raw = r#"{
            "round": 7,
            "timestamp": 1700000000,
            "genesis-id": "testnet-v1.0",
            "genesis-hash": "SGO1GKSzyE7IEPItTxCByw9x8FmnrCDexi9/cOUJOiI=",
            "previous-block-hash": "prevhash",
            "rewards": {"rewards-level": 0},
            "txn-counter": 99
        }"#;
        let block: Block = serde_json::from_str(raw).unwrap();
        assert_eq!(block.round, 7);
        assert!(block.transactions.is_empty());
        assert_eq!(block.txn_counter, Some(99));
    }

    #[test]
    fn asset_response_parses_params() {
        let raw = r#"{
            "current-round": 555,
            "asset": {
                "index": 31566704,
                "created-at-round": 100,
                "deleted": false,
                "params": {
                    "creator": "CREATOR",
                    "name": "USDC",
                    "unit-name": "USDC",
                    "total": 1000000000000,
                    "decimals": 6,
                    "default-frozen": false,
                    "url": "https://example.org"
                }
            }
        }"#;
        let res: AssetResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(res.asset.index, 31566704);
        assert_eq!(res.asset.params.unit_name, "USDC");
        assert_eq!(res.asset.params.decimals, 6);
    }
}
