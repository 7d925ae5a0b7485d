use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};
use uuid::Uuid;

const CHARACTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate_random_string(length: usize) -> Result<String> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    let mut rng = StdRng::from_seed(seed);

    let s = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARACTERS.len());
            CHARACTERS[idx] as char
        })
        .collect();

    Ok(s)
}

/// `ORD-` followed by 16 random characters from a 36-symbol alphabet.
pub fn generate_order_id() -> Result<String> {
    Ok(format!("ORD-{}", generate_random_string(16)?))
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_string_has_requested_length_and_alphabet() {
        let s = generate_random_string(24).unwrap();
        assert_eq!(s.len(), 24);
        assert!(s.bytes().all(|b| CHARACTERS.contains(&b)));
    }

    #[test]
    fn order_ids_do_not_collide_in_a_burst() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_order_id().unwrap()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.starts_with("ORD-") && id.len() == 20));
    }
}
