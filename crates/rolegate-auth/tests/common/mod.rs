//! Shared helpers for the engine scenario tests.

use rolegate_auth::PermissionModule;
use rolegate_types::WalletAddress;

pub fn wallet(byte: u8) -> WalletAddress {
    WalletAddress::new([byte; 20])
}

/// A fresh module owned by `wallet(1)`.
pub fn module() -> PermissionModule {
    PermissionModule::new(wallet(1)).expect("valid initial owner")
}
