use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;
use crate::domain::table::{IdRange, ProductTable};
use crate::processing::recommendation::{Recommendation, clustered_ids, recommend};

pub mod recommendation;
pub mod similar;

/// Requests accepted by the lookup service.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub enum LookupMessage {
    Similar {
        item_id: ProductId,
        #[serde(default)]
        n: Option<usize>,
    },
    Range,
    ValidIds(usize),
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub enum LookupReply {
    Recommendation(Recommendation),
    Range(Option<IdRange>),
    ValidIds(Vec<ProductId>),
    Error(String),
}

/// Decodes a JSON request and answers it from `table`.
///
/// Every input produces a reply; undecodable requests get
/// [`LookupReply::Error`].
pub fn handle_message(msg: &[u8], table: &ProductTable, default_count: usize) -> LookupReply {
    let parsed = match serde_json::from_slice::<LookupMessage>(msg) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Failed to parse JSON: {e}");
            return LookupReply::Error(format!("invalid request: {e}"));
        }
    };
    log::debug!("Received lookup: {parsed:?}");

    match parsed {
        LookupMessage::Similar { item_id, n } => {
            let n = n.unwrap_or(default_count);
            if n == 0 {
                log::warn!("Rejected lookup for {item_id} with zero count");
                return LookupReply::Error("n must be at least 1".to_string());
            }
            LookupReply::Recommendation(recommend(table, item_id, n))
        }
        LookupMessage::Range => LookupReply::Range(table.id_range()),
        LookupMessage::ValidIds(limit) => LookupReply::ValidIds(clustered_ids(table, limit)),
    }
}
