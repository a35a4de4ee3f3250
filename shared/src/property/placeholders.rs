/// Returns every distinct `%identifier%` token found in `text`, in order of
/// first appearance. Tokens are never empty and never contain whitespace,
/// so a lone percent sign ("100% %ping%") does not swallow its neighbour.
pub fn detect_identifiers(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find('%') {
        let after = &rest[start + 1..];
        let Some(len) = after.find('%') else {
            break;
        };
        let candidate = &after[..len];
        if candidate.is_empty() || candidate.contains(char::is_whitespace) {
            // the closing percent may open the next token
            rest = &after[len..];
            continue;
        }
        let identifier = format!("%{}%", candidate);
        if !found.contains(&identifier) {
            found.push(identifier);
        }
        rest = &after[len + 1..];
    }

    found
}
