use proptest::prelude::*;

use stampflow_types::{AddressError, WalletAddress};

proptest! {
    /// Any 20-byte value hex-encodes to a parseable address.
    #[test]
    fn address_from_bytes_parses(bytes in prop::array::uniform20(0u8..)) {
        let raw = format!("0x{}", hex::encode(bytes));
        let addr = WalletAddress::parse(raw.clone()).unwrap();
        prop_assert_eq!(addr.as_str(), raw.as_str());
        prop_assert!(addr.is_valid());
    }

    /// Parsing never panics on arbitrary input.
    #[test]
    fn address_parse_total(raw in ".*") {
        let _ = WalletAddress::parse(raw);
    }

    /// Bodies of the wrong length are rejected with BadLength.
    #[test]
    fn address_wrong_length_rejected(body in "[0-9a-f]{1,80}") {
        prop_assume!(body.len() != 40);
        let err = WalletAddress::parse(format!("0x{body}")).unwrap_err();
        prop_assert_eq!(err, AddressError::BadLength(body.len()));
    }

    /// Case differences never affect equality.
    #[test]
    fn address_eq_ignores_case(bytes in prop::array::uniform20(0u8..)) {
        let lower = WalletAddress::parse(format!("0x{}", hex::encode(bytes))).unwrap();
        let upper = WalletAddress::parse(format!("0x{}", hex::encode_upper(bytes))).unwrap();
        prop_assert_eq!(lower, upper);
    }
}
