//! Per-interaction user tokens. Advisory only: nothing stores them and no
//! uniqueness is promised to the collector.

use rand::Rng;
use shared::domain::EphemeralUserId;

const USER_ID_PREFIX: &str = "user_";
const USER_ID_SUFFIX_LEN: usize = 9;
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn new_user_id() -> EphemeralUserId {
    let mut rng = rand::rng();
    let suffix: String = std::iter::repeat_with(|| {
        char::from(BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())])
    })
    .take(USER_ID_SUFFIX_LEN)
    .collect();
    EphemeralUserId(format!("{USER_ID_PREFIX}{suffix}"))
}
