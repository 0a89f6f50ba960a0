// src/domain/id.rs

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an opaque record id: current unix millis in base36 plus a
/// 6-character random suffix. Time prefix keeps ids roughly insertion-ordered;
/// the suffix keeps ids created in the same millisecond distinct.
pub fn uid() -> String {
    let mut id = to_base36(Utc::now().timestamp_millis() as u64);
    let mut rng = rand::thread_rng();
    for _ in 0..6 {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
