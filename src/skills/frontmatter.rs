//! Optional YAML frontmatter at the top of prompt files.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PromptFrontmatter {
    #[serde(default)]
    pub description: Option<String>,
}

/// Split `content` into its frontmatter text and body.
///
/// Returns `None` when the content does not start with a `---` fence or the
/// fence is never closed; the whole content is then the body.
pub(crate) fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let stripped = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in stripped.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let frontmatter = &stripped[..offset];
            let body = &stripped[offset + line.len()..];
            return Some((frontmatter, body));
        }
        offset += line.len();
    }

    None
}

/// Parse the frontmatter of `content`, if any.
pub(crate) fn parse_frontmatter(
    content: &str,
) -> Result<(Option<PromptFrontmatter>, &str), serde_yaml::Error> {
    let Some((frontmatter_text, body)) = split_frontmatter(content) else {
        return Ok((None, content));
    };

    if frontmatter_text.trim().is_empty() {
        return Ok((None, body));
    }

    let frontmatter = serde_yaml::from_str::<PromptFrontmatter>(frontmatter_text)?;
    Ok((Some(frontmatter), body))
}

pub(crate) fn first_non_empty_line(content: &str) -> Option<String> {
    content
        .lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

pub(crate) fn non_empty_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
