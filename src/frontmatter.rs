//! YAML frontmatter extraction.
//!
//! A document carries frontmatter when it starts with a `---` line. The
//! text up to the next `---` line is parsed as a YAML mapping and the rest
//! is the body. Anything malformed is treated as "no frontmatter", and the
//! whole content is chunked.

use std::collections::BTreeMap;

use doc_chunker_core::Frontmatter;
use serde_json::Value;
use tracing::debug;

const DELIMITER: &str = "---\n";

/// Split `content` into its frontmatter and body.
pub fn parse_frontmatter(content: &str) -> (Frontmatter, &str) {
    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return (Frontmatter::default(), content);
    };
    let Some((yaml, body)) = rest.split_once(DELIMITER) else {
        return (Frontmatter::default(), content);
    };

    if yaml.trim().is_empty() {
        return (Frontmatter::default(), body);
    }

    match serde_yaml::from_str::<BTreeMap<String, Value>>(yaml) {
        Ok(fields) => (Frontmatter::new(fields), body),
        Err(e) => {
            debug!(error = %e, "ignoring malformed frontmatter");
            (Frontmatter::default(), content)
        }
    }
}
