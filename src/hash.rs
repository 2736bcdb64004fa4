use tiny_keccak::{Hasher, Keccak};

/// Caller-supplied hash over raw key bytes. Must be deterministic.
pub type HashFn = fn(&[u8]) -> u64;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// First eight bytes of keccak-256, little-endian.
pub fn keccak64(input: &[u8]) -> u64 {
    let digest = keccak256(input);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(prefix)
}

pub fn fnv1a64(input: &[u8]) -> u64 {
    input.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::{fnv1a64, keccak256, keccak64};

    #[test]
    fn keccak_is_stable_for_input() {
        let first = keccak256(b"slot");
        let second = keccak256(b"slot");
        assert_eq!(first, second);
    }

    #[test]
    fn keccak_of_empty_input_matches_known_digest() {
        let expected = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
        let actual: String = keccak256(b"")
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn keccak64_reads_digest_prefix_little_endian() {
        let digest = keccak256(b"abc");
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        assert_eq!(keccak64(b"abc"), u64::from_le_bytes(prefix));
    }

    #[test]
    fn fnv1a64_matches_reference_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
    }
}
