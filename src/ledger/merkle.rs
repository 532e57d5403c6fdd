use super::hash::sha256_hex;

/// Fold an ordered batch of transactions into a single root digest.
///
/// An empty batch yields the empty string ("no transactions"); a single
/// element is returned unchanged, without hashing the leaf. Otherwise
/// consecutive elements are paired in order (an odd tail is paired with the
/// empty string), each pair is concatenated with no delimiter and hashed,
/// and the reduction repeats over the digests until one remains.
///
/// The reduction is order-sensitive: reordering transactions changes the
/// root.
pub fn merkle_root(transactions: &[String]) -> String {
    if transactions.is_empty() {
        return String::new();
    }
    if transactions.len() == 1 {
        return transactions[0].clone();
    }

    let mut level = transactions.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let first = pair[0].as_str();
            let second = pair.get(1).map(String::as_str).unwrap_or("");
            let mut combined = String::with_capacity(first.len() + second.len());
            combined.push_str(first);
            combined.push_str(second);
            next.push(sha256_hex(combined.as_bytes()));
        }
        level = next;
    }
    level.swap_remove(0)
}
