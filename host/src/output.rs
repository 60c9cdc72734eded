//! Output formatting for help documents.

use command_args_core::Document;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Text,
}

/// Formats a document in the requested output format.
pub fn format_document(document: &Document, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(document_to_markdown(document)),
        OutputFormat::Text => Ok(document_to_text(document)),
    }
}

fn document_to_markdown(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", document.title));
    out.push_str(&format!("{}\n", document.description));

    for field in &document.fields {
        out.push_str(&format!("\n## {}\n\n{}\n", field.name, field.value));
    }

    out
}

/// Plain text with markdown emphasis stripped.
fn document_to_text(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&strip_markup(&document.title));
    out.push('\n');
    out.push_str(&"=".repeat(document.title.chars().count()));
    out.push('\n');
    out.push_str(&strip_markup(&document.description));
    out.push('\n');

    for field in &document.fields {
        out.push('\n');
        out.push_str(&strip_markup(&field.name));
        out.push('\n');
        for line in field.value.lines() {
            out.push_str("  ");
            out.push_str(&strip_markup(line));
            out.push('\n');
        }
    }

    out
}

fn strip_markup(text: &str) -> String {
    text.replace("**", "").replace('`', "")
}

#[cfg(test)]
mod tests {
    use command_args_core::Field;

    use super::*;

    fn sample() -> Document {
        Document {
            title: "test".to_string(),
            description: "a testing command\n**Usage:** `!test` `{NUMBER}`".to_string(),
            fields: vec![Field::new(
                "Required Arguments",
                "**`NUMBER`** type: `number`\nthe test number",
            )],
        }
    }

    #[test]
    fn test_markdown() {
        let md = format_document(&sample(), OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# test\n\n"));
        assert!(md.contains("\n## Required Arguments\n\n**`NUMBER`** type: `number`"));
    }

    #[test]
    fn test_text_strips_markup() {
        let text = format_document(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "test\n====\na testing command\nUsage: !test {NUMBER}\n\nRequired Arguments\n  NUMBER type: number\n  the test number\n"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let json = format_document(&sample(), OutputFormat::Json).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
