use serde::Serialize;
use serde_json::Value;
use verity_core::{CheckState, PageIdentity, RenderableClaim, VerdictRecord, present};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Where a displayed verdict came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    Cache,
    Backend,
}

/// A verdict as `show` and `check` print it.
#[derive(Debug, Serialize)]
pub struct VerdictView {
    pub url: PageIdentity,
    pub state: CheckState,
    pub source: VerdictSource,
    pub claims: Vec<RenderableClaim>,
}

impl VerdictView {
    #[must_use]
    pub fn new(record: &VerdictRecord, state: CheckState, source: VerdictSource) -> Self {
        Self {
            url: record.page_identity.clone(),
            state,
            source,
            claims: present(record),
        }
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a verdict. The table form lists claims, then each claim's sources.
pub fn render_verdict(view: &VerdictView, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }

    let source = match view.source {
        VerdictSource::Cache => "stored verdict",
        VerdictSource::Backend => "fresh check",
    };
    let mut out = format!("{} ({source}, {})\n", view.url, view.state);

    if view.claims.is_empty() {
        out.push_str("(no claims found)");
        return Ok(out);
    }

    let rows = view
        .claims
        .iter()
        .enumerate()
        .map(|(index, claim)| {
            vec![
                (index + 1).to_string(),
                claim.label.unwrap_or("-").to_string(),
                claim.summary.clone(),
                claim.citations.len().to_string(),
            ]
        })
        .collect::<Vec<_>>();
    out.push_str(&table::render_table(
        &["#", "assessment", "claim", "sources"],
        &rows,
        table_options(),
    ));

    for (index, claim) in view.claims.iter().enumerate() {
        if claim.citations.is_empty() {
            continue;
        }
        out.push_str(&format!("\n\n[{}] {}", index + 1, claim.summary));
        for citation in &claim.citations {
            out.push_str(&format!("\n    {}\n      {}", citation.summary, citation.link));
        }
    }
    Ok(out)
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| {
                    item.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use verity_core::{Assessment, Citation, Claim};

    use super::*;

    #[derive(Serialize)]
    struct Example {
        url: &'static str,
        removed: bool,
    }

    fn view() -> VerdictView {
        let record = VerdictRecord::new(
            PageIdentity::new("https://example.com/a").unwrap(),
            vec![
                Claim::new(
                    "The sky is green",
                    Assessment::False,
                    BTreeMap::from([(
                        Assessment::True,
                        vec![Citation::new("https://x", "sky color study")],
                    )]),
                ),
                Claim::new("Nobody knows", Assessment::NotFound, BTreeMap::new()),
            ],
        );
        VerdictView::new(&record, CheckState::Cached, VerdictSource::Cache)
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { url: "u", removed: true }, OutputFormat::Raw).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["removed"], true);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_table_has_key_value_rows() {
        let out = render(&Example { url: "u", removed: false }, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("removed"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let items: Vec<Example> = Vec::new();
        assert_eq!(render(&items, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn verdict_json_carries_presentation_fields() {
        let out = render_verdict(&view(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["url"], "https://example.com/a");
        assert_eq!(parsed["state"], "cached");
        assert_eq!(parsed["source"], "cache");
        assert_eq!(parsed["claims"][0]["label"], "False");
        assert_eq!(parsed["claims"][0]["css_class"], "assessment--false");
        assert_eq!(parsed["claims"][0]["citations"][0]["link"], "https://x");
        assert!(parsed["claims"][1]["label"].is_null());
    }

    #[test]
    fn verdict_table_lists_claims_then_sources() {
        let out = render_verdict(&view(), OutputFormat::Table).unwrap();

        assert!(out.starts_with("https://example.com/a (stored verdict, cached)"));
        assert!(out.contains("The sky is green"));
        assert!(out.contains("[1] The sky is green"));
        assert!(out.contains("sky color study"));
        assert!(!out.contains("[2]"));
    }
}
