/// Normalizes a raw opening name to its family label: the text before the
/// first colon. "Sicilian Defense: Najdorf Variation" and "Sicilian Defense"
/// group together; empty or unknown ("?") names yield `None`.
pub fn opening_family(raw: &str) -> Option<String> {
    let family = raw.split(':').next().unwrap_or("").trim();
    if family.is_empty() || family == "?" {
        None
    } else {
        Some(family.to_string())
    }
}
