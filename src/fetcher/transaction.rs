//! Size extraction from fetched transaction records

use solana_transaction_status::EncodedTransactionWithStatusMeta;

use crate::errors::SolmapResult;

/// Serialized byte length of each record's transaction payload, in block
/// transaction order.
///
/// The metric covers the transaction itself (message and signatures) as the
/// RPC encoded it, excluding execution metadata. The mapping is pure:
/// identical payload content always yields identical sizes, and an empty
/// record set yields an empty size set.
pub fn extract_sizes(
    transactions: &[EncodedTransactionWithStatusMeta],
) -> SolmapResult<Vec<u64>> {
    transactions.iter().map(transaction_size).collect()
}

/// Byte length of one record's UTF-8 JSON transaction payload.
pub fn transaction_size(record: &EncodedTransactionWithStatusMeta) -> SolmapResult<u64> {
    let payload = serde_json::to_vec(&record.transaction)?;
    Ok(payload.len() as u64)
}
