//! Built-in table templates.

use serde_json::{Map, Value};

use super::{TemplateEngine, TemplateError, TemplateFormat};

/// Identifiers of the templates [`BuiltinTemplates`] can render.
pub const TEMPLATE_NAMES: [&str; 4] = [
    "request-parameters",
    "path-parameters",
    "request-headers",
    "response-headers",
];

struct TableLayout {
    rows_key: &'static str,
    first_column: &'static str,
    /// Model key holding a caption shown when no `title` is given.
    caption_key: Option<&'static str>,
}

fn layout(template: &str) -> Option<TableLayout> {
    let layout = match template {
        "request-parameters" => TableLayout {
            rows_key: "parameters",
            first_column: "Parameter",
            caption_key: None,
        },
        "path-parameters" => TableLayout {
            rows_key: "parameters",
            first_column: "Parameter",
            caption_key: Some("path"),
        },
        "request-headers" | "response-headers" => TableLayout {
            rows_key: "headers",
            first_column: "Name",
            caption_key: None,
        },
        _ => return None,
    };
    Some(layout)
}

/// One rendered table row.
struct Row {
    name: String,
    description: String,
}

/// Renders the snippet tables in a fixed [`TemplateFormat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinTemplates {
    format: TemplateFormat,
}

impl BuiltinTemplates {
    pub const fn new(format: TemplateFormat) -> Self {
        Self { format }
    }

    fn rows(template: &str, model: &Value, rows_key: &str) -> Result<Vec<Row>, TemplateError> {
        let invalid = |reason: String| TemplateError::InvalidModel {
            template: template.to_string(),
            reason,
        };
        let entries = model
            .get(rows_key)
            .and_then(Value::as_array)
            .ok_or_else(|| invalid(format!("expected an array under '{rows_key}'")))?;

        entries
            .iter()
            .map(|entry| {
                let entry = entry
                    .as_object()
                    .ok_or_else(|| invalid("table entries must be objects".to_string()))?;
                let name = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| invalid("table entry without a name".to_string()))?;
                Ok(Row {
                    name: name.to_string(),
                    description: describe(entry),
                })
            })
            .collect()
    }

    fn render_asciidoctor(
        caption: Option<Caption<'_>>,
        first_column: &str,
        rows: &[Row],
    ) -> String {
        let mut out = String::new();
        match caption {
            Some(Caption::Title(title)) => out.push_str(&format!(".{title}\n")),
            Some(Caption::Code(code)) => out.push_str(&format!(".+{code}+\n")),
            None => {}
        }
        out.push_str("|===\n");
        out.push_str(&format!("|{first_column}|Description\n"));
        for row in rows {
            out.push('\n');
            out.push_str(&format!("|`+{}+`\n", escape_cell(&row.name)));
            out.push_str(&format!("|{}\n", escape_cell(&row.description)));
        }
        out.push('\n');
        out.push_str("|===\n");
        out
    }

    fn render_markdown(caption: Option<Caption<'_>>, first_column: &str, rows: &[Row]) -> String {
        let mut out = String::new();
        match caption {
            Some(Caption::Title(title)) => out.push_str(&format!("**{title}**\n\n")),
            Some(Caption::Code(code)) => out.push_str(&format!("`{code}`\n\n")),
            None => {}
        }
        out.push_str(&format!("{first_column} | Description\n"));
        out.push_str(&format!("{} | -----------\n", "-".repeat(first_column.len())));
        for row in rows {
            out.push_str(&format!(
                "`{}` | {}\n",
                escape_cell(&row.name),
                escape_cell(&row.description)
            ));
        }
        out
    }
}

enum Caption<'a> {
    Title(&'a str),
    Code(&'a str),
}

fn describe(entry: &Map<String, Value>) -> String {
    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let optional = entry
        .get("optional")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if optional {
        format!("{description} _(optional)_").trim_start().to_string()
    } else {
        description.to_string()
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl TemplateEngine for BuiltinTemplates {
    fn render(&self, template: &str, model: &Value) -> Result<String, TemplateError> {
        let layout = layout(template).ok_or_else(|| TemplateError::NotFound(template.to_string()))?;
        let rows = Self::rows(template, model, layout.rows_key)?;

        let title = model.get("title").and_then(Value::as_str);
        let caption = title.map(Caption::Title).or_else(|| {
            layout
                .caption_key
                .and_then(|key| model.get(key))
                .and_then(Value::as_str)
                .map(Caption::Code)
        });

        tracing::debug!(template, format = %self.format, rows = rows.len(), "Rendering snippet");
        let rendered = match self.format {
            TemplateFormat::Asciidoctor => {
                Self::render_asciidoctor(caption, layout.first_column, &rows)
            }
            TemplateFormat::Markdown => Self::render_markdown(caption, layout.first_column, &rows),
        };
        Ok(rendered)
    }
}
