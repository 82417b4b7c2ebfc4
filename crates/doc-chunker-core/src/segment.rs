//! Heading segmentation.
//!
//! Splits document text into sections at major headings (`#` and `##`).
//! Minor headings (`###` and deeper) never start a new section; they stay
//! inside the section of the nearest preceding major heading.

/// Whether `line` is a major heading: one or two `#` at the start of the
/// line, not followed by a third `#`, followed by whitespace.
pub fn is_major_heading(line: &str) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    (1..=2).contains(&hashes)
        && line[hashes..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// Split `text` into trimmed, non-empty sections at major headings.
///
/// Each section except possibly the first (a preamble) begins with its
/// heading line. A document without major headings yields a single
/// section equal to the trimmed input; blank input yields none.
pub fn split_on_headings(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_major_heading(line) && !current.is_empty() {
            close_section(&mut sections, &current);
            current.clear();
        }
        current.push(line);
    }
    close_section(&mut sections, &current);

    sections
}

fn close_section(sections: &mut Vec<String>, lines: &[&str]) {
    let section = lines.join("\n");
    let trimmed = section.trim();
    if !trimmed.is_empty() {
        sections.push(trimmed.to_string());
    }
}
