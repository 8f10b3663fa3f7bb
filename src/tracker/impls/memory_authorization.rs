use async_trait::async_trait;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::memory_authorization::MemoryAuthorization;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::traits::authorization_provider::AuthorizationProvider;

impl MemoryAuthorization {
    pub fn from_passkeys(passkeys: &[String]) -> MemoryAuthorization
    {
        MemoryAuthorization {
            passkeys: RwLock::new(passkeys.iter().map(|passkey| passkey.trim().to_string()).collect()),
        }
    }

    pub fn add_passkey(&self, passkey: &Passkey) -> bool
    {
        self.passkeys.write().insert(passkey.as_str().to_string())
    }

    pub fn remove_passkey(&self, passkey: &Passkey) -> bool
    {
        self.passkeys.write().remove(passkey.as_str())
    }

    pub fn get_passkeys_amount(&self) -> usize
    {
        self.passkeys.read().len()
    }
}

#[async_trait]
impl AuthorizationProvider for MemoryAuthorization {
    async fn authorize(&self, _info_hash: &InfoHash, passkey: &Passkey) -> bool
    {
        self.passkeys.read().contains(passkey.as_str())
    }
}
