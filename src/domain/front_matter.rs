use std::collections::HashMap;

/// The outcome of splitting a raw markdown file into metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: HashMap<String, String>,
    pub content: String,
}

/// Split a raw markdown file into a flat metadata map and the remaining body.
///
/// The metadata block is delimited by a leading `---` line and the next `---`
/// line. Each line in between is split on its first colon; the value keeps any
/// further colons and loses one layer of surrounding quotes. Lines without a
/// colon and blank lines are skipped. Malformed input never fails: anything
/// that does not look like a metadata block is returned as body text.
pub fn parse_document(raw: &str) -> ParsedDocument {
    let mut lines = raw.lines();
    let opens_with_delimiter = matches!(lines.next(), Some(first) if first.trim() == "---");
    if !opens_with_delimiter {
        return ParsedDocument {
            metadata: HashMap::new(),
            content: raw.trim().to_string(),
        };
    }

    let mut metadata = HashMap::new();
    let mut body_lines = Vec::new();
    let mut in_metadata_block = true;
    for line in lines {
        if !in_metadata_block {
            body_lines.push(line);
            continue;
        }
        if line.trim() == "---" {
            in_metadata_block = false;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        metadata.insert(
            key.trim().to_string(),
            strip_quotes(value.trim()).to_string(),
        );
    }

    // A missing closing delimiter means this was never a metadata block.
    if in_metadata_block {
        return ParsedDocument {
            metadata: HashMap::new(),
            content: raw.trim().to_string(),
        };
    }

    ParsedDocument {
        metadata,
        content: body_lines.join("\n").trim().to_string(),
    }
}

/// Assemble a markdown document from ordered metadata fields and a body.
///
/// Fields with empty values are omitted. Values are double-quoted with
/// backslashes and quotes escaped and embedded newlines flattened to spaces.
/// When every field is empty, the document is the trimmed body alone.
pub fn render_document(fields: &[(&str, &str)], content: &str) -> String {
    let mut block = String::new();
    for (key, value) in fields {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace("\r\n", " ")
            .replace(['\n', '\r'], " ");
        block.push_str(key);
        block.push_str(": \"");
        block.push_str(&escaped);
        block.push_str("\"\n");
    }

    if block.is_empty() {
        format!("{}\n", content.trim())
    } else {
        format!("---\n{}---\n\n{}\n", block, content.trim())
    }
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
