use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;
const MAX_BASE_LEN: usize = 50;

/// Derives a collision-free storage key from an original file name.
///
/// The base name is sanitized to `[A-Za-z0-9-_]`, repeated dashes are
/// collapsed and the result truncated to 50 characters, then a millisecond
/// timestamp and a 6-character random base36 suffix are appended. The storage
/// layer additionally writes with non-overwrite semantics, so even the
/// astronomically unlikely collision surfaces as a write error rather than a
/// silent replace.
pub fn unique_object_name(original_name: &str) -> String {
    let (base, extension) = split_extension(original_name);

    let mut sanitized = String::with_capacity(base.len());
    let mut last_was_dash = false;
    for c in base.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            c
        } else {
            '-'
        };
        if mapped == '-' {
            if last_was_dash {
                continue;
            }
            last_was_dash = true;
        } else {
            last_was_dash = false;
        }
        sanitized.push(mapped);
    }
    // Sanitized text is pure ASCII, so byte truncation is safe; edge dashes
    // are trimmed, and again after truncation since the cut can expose one
    let mut sanitized = sanitized.trim_matches('-').to_string();
    sanitized.truncate(MAX_BASE_LEN);
    let sanitized = sanitized.trim_end_matches('-');

    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    match extension {
        Some(ext) => format!("{}-{}-{}.{}", sanitized, millis, suffix, ext.to_lowercase()),
        None => format!("{}-{}-{}", sanitized, millis, suffix),
    }
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}
