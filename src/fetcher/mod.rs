//! Block fetching from the Solana ledger

mod rpc;
pub mod transaction;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_transaction_status::EncodedTransactionWithStatusMeta;

use crate::errors::SolmapResult;

pub use self::transaction::extract_sizes;

/// Fetches committed blocks from a Solana RPC endpoint.
pub struct BlockFetcher {
    rpc_client: RpcClient,
}

impl BlockFetcher {
    /// Create a fetcher for the given RPC URL, at confirmed commitment.
    pub fn new(rpc_url: &str) -> Self {
        let rpc_client =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());
        Self { rpc_client }
    }

    /// Get the transactions committed in the block at `slot`.
    ///
    /// A slot with no block behind it (skipped, pruned, or not yet reached)
    /// yields an empty vector so the caller still renders a valid image;
    /// transport failures propagate. One RPC round trip, no retries.
    pub async fn block_transactions(
        &self,
        slot: u64,
    ) -> SolmapResult<Vec<EncodedTransactionWithStatusMeta>> {
        rpc::get_block_transactions(&self.rpc_client, slot).await
    }
}
