//! RPC client interactions for block retrieval

use log::{debug, warn};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcBlockConfig;
use solana_client::rpc_custom_error::{
    JSON_RPC_SERVER_ERROR_BLOCK_CLEANED_UP, JSON_RPC_SERVER_ERROR_BLOCK_NOT_AVAILABLE,
    JSON_RPC_SERVER_ERROR_LONG_TERM_STORAGE_SLOT_SKIPPED, JSON_RPC_SERVER_ERROR_SLOT_SKIPPED,
};
use solana_client::rpc_request::RpcError;
use solana_commitment_config::CommitmentConfig;
use solana_transaction_status::{
    EncodedTransactionWithStatusMeta, TransactionDetails, UiTransactionEncoding,
};

use crate::errors::SolmapResult;

/// Get the transactions of the block at the given slot.
///
/// Fetches at confirmed commitment with JSON encoding, full transaction
/// details, and transaction version 0 support. Slots the ledger holds no
/// block for resolve to an empty vector.
pub async fn get_block_transactions(
    rpc_client: &RpcClient,
    slot: u64,
) -> SolmapResult<Vec<EncodedTransactionWithStatusMeta>> {
    let config = RpcBlockConfig {
        encoding: Some(UiTransactionEncoding::Json),
        transaction_details: Some(TransactionDetails::Full),
        rewards: Some(false),
        commitment: Some(CommitmentConfig::confirmed()),
        max_supported_transaction_version: Some(0),
    };

    match rpc_client.get_block_with_config(slot, config).await {
        Ok(block) => {
            let transactions = block.transactions.unwrap_or_default();
            debug!("Fetched {} transactions at slot {}", transactions.len(), slot);
            Ok(transactions)
        }
        Err(err) if is_missing_block(&err) => {
            warn!("No block at slot {}, rendering empty image: {}", slot, err);
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Whether an RPC failure means "the ledger holds no block at this slot"
/// rather than a transport problem.
pub(super) fn is_missing_block(err: &ClientError) -> bool {
    match &err.kind {
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. }) => matches!(
            *code,
            JSON_RPC_SERVER_ERROR_BLOCK_CLEANED_UP
                | JSON_RPC_SERVER_ERROR_BLOCK_NOT_AVAILABLE
                | JSON_RPC_SERVER_ERROR_SLOT_SKIPPED
                | JSON_RPC_SERVER_ERROR_LONG_TERM_STORAGE_SLOT_SKIPPED
        ),
        _ => false,
    }
}
