use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic pair in `[-1, 1]²` derived from an id.
pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

/// Cuts `label` to at most `max_chars` characters, never splitting a char.
pub fn truncate_label(label: &str, max_chars: usize) -> &str {
    match label.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &label[..byte_index],
        None => label,
    }
}
