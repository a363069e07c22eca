use data_encoding::HEXLOWER;
use log::debug;
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Amount of random bytes in a generated secret, the hex string is twice as long.
pub const DEFAULT_SECRET_LENGTH: usize = 64;

/// Generates `length` random bytes from an OS seeded [StdRng] and encodes them as lowercase hex.
pub fn generate(length: usize) -> String {
    debug!("Generating {length} byte secret");
    let mut buff = vec![0_u8; length];
    let mut rng = StdRng::from_entropy();
    rng.fill_bytes(&mut buff);
    HEXLOWER.encode(&buff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn default_secret_is_128_lowercase_hex_chars() {
        let secret = generate(DEFAULT_SECRET_LENGTH);
        let re = Regex::new("^[0-9a-f]{128}$").unwrap();
        assert!(re.is_match(&secret), "unexpected secret format: {secret}");
    }

    #[test]
    fn length_is_in_bytes() {
        assert_eq!(generate(16).len(), 32);
        assert!(generate(0).is_empty());
    }

    #[test]
    fn secrets_are_fresh() {
        assert_ne!(generate(DEFAULT_SECRET_LENGTH), generate(DEFAULT_SECRET_LENGTH));
    }
}
