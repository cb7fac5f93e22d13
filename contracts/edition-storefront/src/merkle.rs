use sha3::Digest;

use crate::ContractError;

fn keccak(data: &[u8]) -> Result<[u8; 32], ContractError> {
    sha3::Keccak256::digest(data)
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongLength {})
}

/// Hex without the `0x` prefix the merkletreejs tooling emits.
fn unprefixed(encoded: &str) -> &str {
    encoded
        .strip_prefix("0x")
        .or_else(|| encoded.strip_prefix("0X"))
        .unwrap_or(encoded)
}

/// Checks that `address` is a leaf of the tree with the hex encoded `root`.
///
/// Leaves are `keccak256(address)` and every pair is sorted before hashing,
/// so proofs carry no left/right flags.
pub fn verify(proof: &[String], address: &str, root: &str) -> Result<bool, ContractError> {
    let mut hash = keccak(address.as_bytes())?;

    for p in proof {
        let mut proof_buf: [u8; 32] = [0; 32];
        hex::decode_to_slice(unprefixed(p), &mut proof_buf)?;

        hash = if hash < proof_buf {
            keccak(&[hash, proof_buf].concat())?
        } else {
            keccak(&[proof_buf, hash].concat())?
        };
    }

    let mut root_buf: [u8; 32] = [0; 32];
    hex::decode_to_slice(unprefixed(root), &mut root_buf)?;
    Ok(root_buf == hash)
}

/// Rejects anything that is not a 32 byte hex string, with or without `0x`.
pub fn validate_root(root: &str) -> Result<(), ContractError> {
    let mut root_buf: [u8; 32] = [0; 32];
    hex::decode_to_slice(unprefixed(root), &mut root_buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(a: [u8; 32], b: [u8; 32]) -> [u8; 32] {
        if a < b {
            keccak(&[a, b].concat()).unwrap()
        } else {
            keccak(&[b, a].concat()).unwrap()
        }
    }

    #[test]
    fn verify_sorted_pair_tree() {
        let leaves: Vec<[u8; 32]> = ["alice", "bob", "carol", "dave"]
            .iter()
            .map(|a| keccak(a.as_bytes()).unwrap())
            .collect();
        let left = node(leaves[0], leaves[1]);
        let right = node(leaves[2], leaves[3]);
        let root = hex::encode(node(left, right));

        let proof = vec![hex::encode(leaves[3]), hex::encode(left)];
        assert!(verify(&proof, "carol", &root).unwrap());
        assert!(!verify(&proof, "dave", &root).unwrap());
        assert!(!verify(&proof, "mallory", &root).unwrap());

        // single leaf tree
        let root = hex::encode(leaves[0]);
        assert!(verify(&[], "alice", &root).unwrap());
    }

    #[test]
    fn accepts_prefixed_hex() {
        let alice = keccak(b"alice").unwrap();
        let bob = keccak(b"bob").unwrap();
        let root = format!("0x{}", hex::encode(node(alice, bob)));
        validate_root(&root).unwrap();

        let proof = vec![format!("0x{}", hex::encode(bob))];
        assert!(verify(&proof, "alice", &root).unwrap());
        let proof = vec![format!("0X{}", hex::encode(alice))];
        assert!(verify(&proof, "bob", &root.replacen("0x", "0X", 1)).unwrap());

        // single leaf tree
        let root = format!("0x{}", hex::encode(alice));
        validate_root(&root).unwrap();
        assert!(verify(&[], "alice", &root).unwrap());
    }

    #[test]
    fn malformed_input() {
        let root = hex::encode(keccak(b"alice").unwrap());
        let err = verify(&["zz".to_string()], "alice", &root).unwrap_err();
        assert!(matches!(err, ContractError::Hex(_)));

        assert!(validate_root(&root).is_ok());
        assert!(matches!(
            validate_root("abcd").unwrap_err(),
            ContractError::Hex(_)
        ));
    }
}
