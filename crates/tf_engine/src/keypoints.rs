/// Split free text into up to three highlight sentences. Fragments are cut
/// on sentence terminators and kept only when their trimmed length exceeds
/// 20 characters. Empty input yields an empty vec, not an error.
pub fn extract_key_points(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .filter(|fragment| fragment.trim().chars().count() > 20)
        .take(3)
        .map(|fragment| fragment.trim().to_string())
        .collect()
}
