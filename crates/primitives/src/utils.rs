//! Misc utils

use ethers::{types::Address, utils::to_checksum};

/// Converts address to checksum address
pub fn as_checksum_addr<S>(val: &Address, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&to_checksum(val, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "as_checksum_addr")]
        addr: Address,
    }

    #[test]
    fn serialize_checksum_addr() {
        let wrapper = Wrapper {
            addr: "0x9c5754de1443984659e1b3a8d1931d83475ba29c".parse().unwrap(),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"addr":"0x9c5754De1443984659E1b3a8d1931D83475ba29C"}"#);
    }
}
