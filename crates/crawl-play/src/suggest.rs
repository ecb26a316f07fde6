//! Close-name suggestions for mistyped names.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// The candidate most similar to `input`, if any is similar enough.
/// Comparison ignores case.
pub fn closest_name<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .into_iter()
        .map(|name| (name, jaro_winkler(&input, &name.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_near_miss() {
        assert_eq!(closest_name("boxx", ["box", "rat"]), Some("box"));
        assert_eq!(closest_name("BOX", ["box"]), Some("box"));
    }

    #[test]
    fn ignores_distant_names() {
        assert_eq!(closest_name("dragon", ["box", "rat"]), None);
        assert_eq!(closest_name("box", std::iter::empty()), None);
    }
}
