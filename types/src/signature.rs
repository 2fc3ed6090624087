//! The additional-signer record returned by the verifier service.

use crate::address::WalletAddress;
use serde::{Deserialize, Serialize};

/// A successfully verified alternate wallet/credential pairing.
///
/// Opaque to the flow controller: it only tests for presence to decide
/// which view to render. The fields exist for the confirmation view and
/// for host logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSignature {
    /// The alternate wallet address that holds the eligible credential.
    pub signer: WalletAddress,
    /// Hex-encoded signature the alternate wallet produced over the challenge.
    pub signature: String,
    /// The challenge message that was signed.
    pub challenge: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_wire_json() {
        let json = format!(
            r#"{{"signer":"0x{}","signature":"deadbeef","challenge":"prove it"}}"#,
            "11".repeat(20)
        );
        let sig: AdditionalSignature = serde_json::from_str(&json).unwrap();
        assert!(sig.signer.is_valid());
        assert_eq!(sig.challenge, "prove it");
    }
}
