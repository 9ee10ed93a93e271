//! Friendly labels for wallet addresses.
//!
//! The raw address is never shown inline; the view renders one of these
//! names instead and keeps the address for hover text and copying.

/// Ordered pool of labels. Index selection depends on this order.
pub const DISPLAY_NAMES: [&str; 12] = [
    "Solana Seeker",
    "Crypto Captain",
    "DeFi Degen",
    "Token Trader",
    "Blockchain Builder",
    "Web3 Warrior",
    "Phantom Pilot",
    "Solar System",
    "Digital Nomad",
    "Chain Champion",
    "Yield Farmer",
    "NFT Navigator",
];

/// Map an address to a stable label from [`DISPLAY_NAMES`].
///
/// Sums the UTF-16 code units of the address and picks the name at
/// `sum % DISPLAY_NAMES.len()`. The empty address maps to the empty string.
pub fn derive_name(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let hash: u64 = address.encode_utf16().map(u64::from).sum();
    let index = (hash % DISPLAY_NAMES.len() as u64) as usize;
    DISPLAY_NAMES[index].to_string()
}
