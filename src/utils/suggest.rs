const TOOL_PREFIX: &str = "ebay";

fn normalize_token(value: &str) -> String {
    let folded: String = value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    match folded.strip_prefix(TOOL_PREFIX) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => folded,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn score_candidate(input: &str, candidate: &str) -> usize {
    let a = normalize_token(input);
    let b = normalize_token(candidate);
    if a.is_empty() || b.is_empty() {
        return usize::MAX;
    }
    if a == b {
        return 0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 1;
    }
    levenshtein(&a, &b)
}

fn max_allowed_distance(input: &str) -> usize {
    let len = normalize_token(input).len();
    match len {
        0 => 0,
        1..=4 => 1,
        5..=8 => 2,
        _ => ((len as f32) * 0.35).floor().max(3.0) as usize,
    }
}

/// Ranks `candidates` by edit distance to `input`, ignoring case, punctuation
/// and the `ebay_` tool prefix.
pub fn suggest(input: &str, candidates: &[String], limit: usize) -> Vec<String> {
    if input.trim().is_empty() || candidates.is_empty() {
        return Vec::new();
    }
    let allowed = max_allowed_distance(input);

    let mut scored: Vec<(&String, usize)> = candidates
        .iter()
        .map(|candidate| (candidate, score_candidate(input, candidate)))
        .filter(|(_, score)| *score <= allowed)
        .collect();
    scored.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then_with(|| a.0.len().cmp(&b.0.len()))
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out: Vec<String> = Vec::new();
    for (candidate, _) in scored {
        if !out.contains(candidate) {
            out.push(candidate.clone());
        }
        if out.len() >= limit.max(1) {
            break;
        }
    }
    out
}
