//! Body block parsing.
//!
//! The body is line-oriented: blocks are separated by blank lines, and a
//! line's first characters decide its block kind. Fenced code blocks are
//! opaque; nothing inside them is interpreted.

use crate::document::Block;

/// Parse a document body into blocks.
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let lines: Vec<&str> = body.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim_end();

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        if let Some(info) = line.strip_prefix("```") {
            let language = info.trim().split_whitespace().next().map(str::to_string);
            let mut source_lines = Vec::new();

            i += 1;
            while i < lines.len() && lines[i].trim() != "```" {
                source_lines.push(lines[i]);
                i += 1;
            }
            i += 1; // closing fence, or end of input for an unclosed one

            blocks.push(Block::Code {
                language,
                source: source_lines.join("\n"),
            });
            continue;
        }

        if let Some((level, text)) = parse_heading(line) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if line.starts_with("- ") {
            let mut items = Vec::new();
            while i < lines.len() {
                match lines[i].trim_end().strip_prefix("- ") {
                    Some(item) => {
                        items.push(item.to_string());
                        i += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::List { items });
            continue;
        }

        if line.starts_with('>') {
            let mut quote_lines = Vec::new();
            while i < lines.len() {
                let Some(rest) = lines[i].trim_end().strip_prefix('>') else {
                    break;
                };
                quote_lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
                i += 1;
            }
            blocks.push(Block::Quote { lines: quote_lines });
            continue;
        }

        // Paragraph: consecutive plain lines joined with spaces.
        let mut text = String::new();
        while i < lines.len() {
            let plain = lines[i].trim_end();
            if plain.trim().is_empty() || is_structural(plain) {
                break;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(plain.trim_start());
            i += 1;
        }
        blocks.push(Block::Paragraph { text });
    }

    blocks
}

/// Whether a line starts a non-paragraph block.
fn is_structural(line: &str) -> bool {
    line.starts_with("```")
        || line.starts_with("- ")
        || line.starts_with('>')
        || parse_heading(line).is_some()
}

/// Parse `#`..`######` followed by a space into (level, text).
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text.trim()))
}
