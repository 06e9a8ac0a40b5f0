//! Wallet connection state and chain/network helpers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Networks the client knows by name; anything else renders as
/// [`UNKNOWN_NETWORK`].
pub static SUPPORTED_NETWORKS: Lazy<HashMap<u64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Ethereum Mainnet"),
        (8453, "Base"),
        (84531, "Base Goerli Testnet"),
        (84532, "Base Sepolia Testnet"),
        (5, "Goerli Testnet"),
        (11155111, "Sepolia Testnet"),
    ])
});

pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// Resolve a decimal chain id to its display name.
pub fn network_name(chain_id: u64) -> &'static str {
    SUPPORTED_NETWORKS
        .get(&chain_id)
        .copied()
        .unwrap_or(UNKNOWN_NETWORK)
}

/// Parse a provider-reported hex chain id ("0x1") to decimal.
pub fn parse_chain_id(hex: &str) -> Option<u64> {
    let digits = hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}

/// Abbreviate an address for display: first 6 chars, ellipsis, last 4.
pub fn abbreviate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Events emitted by the injected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// The account list changed; an empty list means access was revoked.
    AccountsChanged(Vec<String>),
    /// The active chain changed; the payload is the hex chain id.
    ChainChanged(String),
}

/// Local connection state. Cleared on disconnect; nothing persists across
/// reloads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletConnection {
    pub connected: bool,
    pub address: Option<String>,
    pub chain_id: Option<u64>,
}

impl WalletConnection {
    /// Display form of the connected address.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_deref().map(abbreviate_address)
    }

    /// Display name of the connected network.
    pub fn network(&self) -> Option<&'static str> {
        self.chain_id.map(network_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0x2105"), Some(8453));
        assert_eq!(parse_chain_id("0x539"), Some(1337));
        assert_eq!(parse_chain_id("1"), None);
        assert_eq!(parse_chain_id("0xzz"), None);
    }

    #[test]
    fn test_network_name_known_and_unknown() {
        assert_eq!(network_name(1), "Ethereum Mainnet");
        assert_eq!(network_name(11155111), "Sepolia Testnet");
        assert_eq!(network_name(1337), UNKNOWN_NETWORK);
    }

    #[test]
    fn test_abbreviate_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(abbreviate_address(addr), "0x5290...9EE7");
        assert_eq!(abbreviate_address("0xabc"), "0xabc");
    }
}
