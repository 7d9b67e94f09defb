use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Opening fence, optional language tag, optional newline, lazily up to the closing fence
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"```(?:\w+)?\n?([\s\S]*?)```").expect("fenced block pattern is valid");
}

/// Pull the code out of a model reply
///
/// Returns the trimmed body of the first fenced block, or the whole reply
/// trimmed when there is no complete fenced block.
pub fn extract_code(response: &str) -> String {
    FENCED_BLOCK
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| response.trim().to_string())
}
