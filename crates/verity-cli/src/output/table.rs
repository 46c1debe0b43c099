#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render an aligned plain-text table.
///
/// Columns shrink from the widest down to fit `max_width`; overlong cells are
/// cut with an ellipsis. With `color` on, assessment and state words are
/// tinted.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let right = is_numeric(&text);
                let padded = pad(&text, *width, right);
                if options.color {
                    tint(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded cell in an ANSI color picked from its text.
fn tint(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "true" | "cached" | "checked" => "32",
        "unclear" | "checking" | "unchecked" => "33",
        "false" | "failed" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["1".into(), "False".into(), "The sky is green".into()],
            vec!["12".into(), "True".into(), "Water is wet".into()],
        ];
        let out = render_table(&["#", "assessment", "claim"], &rows, PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("False"), lines[0].find("assessment"));
        assert!(lines[3].starts_with("  12"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["1".into(), "a very long claim summary that will not fit".into()]];
        let out = render_table(
            &["#", "claim"],
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        for line in out.lines() {
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn color_tints_assessment_words_only() {
        let rows = vec![vec!["False".into(), "sky".into()]];
        let out = render_table(
            &["assessment", "claim"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("\u{1b}[31mFalse"));
        assert!(!out.contains("\u{1b}[31msky"));
    }
}
