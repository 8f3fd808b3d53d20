//! Prompt construction for commit messages and review comments.
//!
//! Rendering is pure and deterministic: the same inputs always produce
//! byte-identical prompt text. Validation of required fields happens in the
//! handlers; this module only renders.

use crate::api::models::LineLimit;

/// System-role message sent with commit-message completions.
pub const COMMIT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that writes Git commit messages.";

/// System-role message sent with review-comment completions.
pub const REVIEW_SYSTEM_PROMPT: &str = "You are a helpful assistant that reviews code changes.";

/// Per-line length limit applied when the request does not supply a usable one.
pub const DEFAULT_MAX_LINE_LENGTH: u32 = 100;

/// Shared closing instruction that introduces the diff in commit prompts.
const DIFF_INSTRUCTION: &str =
    "Given the following staged code diff, generate a clear and concise commit message:";

/// Resolve the per-line length limit from a number-or-string input.
///
/// Absent, unparsable, or non-positive values fall back to
/// [`DEFAULT_MAX_LINE_LENGTH`].
pub fn resolve_max_length(raw: Option<&LineLimit>) -> u32 {
    let parsed = match raw {
        None => None,
        Some(LineLimit::Number(n)) => (*n > 0).then(|| *n as u32),
        Some(LineLimit::Text(s)) => s.trim().parse::<u32>().ok().filter(|v| *v > 0),
    };
    parsed.unwrap_or(DEFAULT_MAX_LINE_LENGTH)
}

/// Render the commit-message prompt (current variant).
///
/// When `custom_prompt` is non-blank it fully replaces the built-in rules;
/// only the diff-submission instruction is appended after it.
pub fn commit_message_prompt(
    diff: &str,
    format: &str,
    max_length_per_line: u32,
    custom_prompt: Option<&str>,
) -> String {
    if let Some(custom) = custom_prompt.map(str::trim).filter(|s| !s.is_empty()) {
        return format!("{custom}\n\n{DIFF_INSTRUCTION}\n{diff}");
    }

    format!(
        "You are an assistant that writes clear, concise Git commit messages.\n\
         \n\
         Subject line format: {format}\n\
         \n\
         Rules:\n\
         - Write the subject line in the imperative mood.\n\
         - Do not end the subject line with a period.\n\
         - Capitalizing the subject line is not required.\n\
         - An optional body may follow after a blank line, as bullet points prefixed with \"-\".\n\
         - Keep every line under {max_length_per_line} characters; when a bullet exceeds the limit, \
         continue it on the next line with a line break instead of starting a new bullet.\n\
         - Optional footer lines use the \"token: value\" form; \"BREAKING CHANGE\" is the reserved \
         token for breaking changes.\n\
         - Output only the commit message itself: no extra commentary, no questions, and do not \
         wrap the message in quotes, backticks, or any other delimiters.\n\
         \n\
         {DIFF_INSTRUCTION}\n\
         {diff}"
    )
}

/// Render the commit-message prompt (legacy variant, selected by the presence
/// of `commitType` in the request).
pub fn legacy_commit_message_prompt(
    diff: &str,
    commit_type: &str,
    format: &str,
    max_length: &LineLimit,
) -> String {
    format!(
        "You are an assistant that writes clear, concise Git commit messages.\n\
         Use the following format: {format}\n\
         Commit type: {commit_type}\n\
         Maximum length: {max_length} characters\n\
         \n\
         {DIFF_INSTRUCTION}\n\
         {diff}"
    )
}

/// Render the review-comment prompt. No customization inputs in this variant.
pub fn review_comment_prompt(diff: &str) -> String {
    format!(
        "I will provide a staged code diff (in unified diff format). Act as a senior software \
         engineer performing a code review.\n\
         Your task is to generate clear, concise, and useful review comments that:\n\
         - Are short (1-3 sentences per comment)\n\
         - Focus on correctness, readability, performance, maintainability, best practices\n\
         - Detect and point out risks such as potential bugs, regressions, or security issues\n\
         - Are easy to read and markdown-friendly\n\
         Each comment should include:\n\
         - File and line reference\n\
         - Brief summary/title\n\
         - Short description of the issue or suggestion\n\
         - Optional quick fix or rationale\n\
         Prioritize high-impact issues (bugs, risks) first. Avoid long explanations and keep every \
         line under 100 characters.\n\
         Output only the review comments themselves: no extra commentary, no questions, and do not \
         wrap the output in quotes, backticks, or any other delimiters.\n\
         Ready? I will now paste the staged code diff:\n\
         {diff}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DIFF: &str = "--- a/main.rs\n+++ b/main.rs\n@@ -1 +1 @@\n-old\n+new";

    #[test]
    fn test_rendering_is_deterministic() {
        let first = commit_message_prompt(DIFF, "<type>: <subject>", 100, None);
        let second = commit_message_prompt(DIFF, "<type>: <subject>", 100, None);
        assert_eq!(first, second);

        let first = review_comment_prompt(DIFF);
        let second = review_comment_prompt(DIFF);
        assert_eq!(first, second);
    }

    #[test]
    fn test_commit_prompt_embeds_inputs() {
        let prompt = commit_message_prompt(DIFF, "<type>: <subject>", 72, None);
        assert!(prompt.contains("Subject line format: <type>: <subject>"));
        assert!(prompt.contains("under 72 characters"));
        assert!(prompt.contains("BREAKING CHANGE"));
        assert!(prompt.contains("imperative mood"));
        assert!(prompt.ends_with(DIFF));
    }

    #[test]
    fn test_custom_prompt_replaces_built_in_rules() {
        let prompt = commit_message_prompt(DIFF, "<subject>", 100, Some("Write haiku commits."));
        assert!(prompt.starts_with("Write haiku commits."));
        assert!(prompt.contains(DIFF_INSTRUCTION));
        assert!(prompt.ends_with(DIFF));
        // None of the built-in rules survive
        assert!(!prompt.contains("imperative mood"));
        assert!(!prompt.contains("BREAKING CHANGE"));
        assert!(!prompt.contains("Subject line format"));
    }

    #[test]
    fn test_blank_custom_prompt_falls_back_to_built_in_rules() {
        let prompt = commit_message_prompt(DIFF, "<subject>", 100, Some("   "));
        assert!(prompt.contains("imperative mood"));
    }

    #[test]
    fn test_resolve_max_length_coercion() {
        assert_eq!(resolve_max_length(None), 100);
        assert_eq!(resolve_max_length(Some(&LineLimit::Number(42))), 42);
        assert_eq!(
            resolve_max_length(Some(&LineLimit::Text("42".to_string()))),
            42
        );
        // Non-positive and unparsable values fall back to the default
        assert_eq!(resolve_max_length(Some(&LineLimit::Number(0))), 100);
        assert_eq!(resolve_max_length(Some(&LineLimit::Number(-5))), 100);
        assert_eq!(
            resolve_max_length(Some(&LineLimit::Text("-5".to_string()))),
            100
        );
        assert_eq!(
            resolve_max_length(Some(&LineLimit::Text("lots".to_string()))),
            100
        );
    }

    #[test]
    fn test_numeric_string_limit_appears_literally() {
        let limit = resolve_max_length(Some(&LineLimit::Text("42".to_string())));
        let prompt = commit_message_prompt(DIFF, "<subject>", limit, None);
        assert!(prompt.contains("under 42 characters"));
    }

    #[test]
    fn test_legacy_prompt_embeds_inputs() {
        let prompt =
            legacy_commit_message_prompt(DIFF, "feat", "<type>: <subject>", &LineLimit::Number(50));
        assert!(prompt.contains("Use the following format: <type>: <subject>"));
        assert!(prompt.contains("Commit type: feat"));
        assert!(prompt.contains("Maximum length: 50 characters"));
        assert!(prompt.ends_with(DIFF));
    }

    #[test]
    fn test_review_prompt_shape() {
        let prompt = review_comment_prompt(DIFF);
        assert!(prompt.contains("senior software engineer"));
        assert!(prompt.contains("1-3 sentences"));
        assert!(prompt.contains("File and line reference"));
        assert!(prompt.contains("under 100 characters"));
        assert!(prompt.ends_with(DIFF));
    }
}
