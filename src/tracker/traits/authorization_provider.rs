use async_trait::async_trait;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::passkey::Passkey;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    /// Whether `passkey` may use the swarm of `info_hash`.
    async fn authorize(&self, info_hash: &InfoHash, passkey: &Passkey) -> bool;
}
