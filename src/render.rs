//! CSV sheet rendering.

use crate::model::TestCaseSpec;

/// Fixed header row. Column order is part of the sheet contract.
pub const CSV_HEADER: &str =
    "TestID,ClassName,Title(MethodName),Preconditions,Steps,ExpectedResult,Summary(Optional)";

/// Render specs as CSV: the header plus one line per row, fields in header
/// order, every field quoted. Rows keep the order they were collected in.
pub fn render_csv(specs: &[TestCaseSpec]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for spec in specs {
        let fields = [
            &spec.test_id,
            &spec.class_name,
            &spec.title,
            &spec.preconditions,
            &spec.steps,
            &spec.expected,
            &spec.summary,
        ];
        let row: Vec<String> = fields.iter().map(|field| quote(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Wrap a field in double quotes, doubling embedded quotes. Embedded
/// newlines stay verbatim; quoting makes them a multi-line cell.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str) -> TestCaseSpec {
        TestCaseSpec {
            test_id: String::new(),
            class_name: "LoginTests".to_string(),
            title: title.to_string(),
            preconditions: String::new(),
            steps: String::new(),
            expected: String::new(),
            summary: String::new(),
        }
    }

    #[test]
    fn header_only_for_empty_input() {
        assert_eq!(render_csv(&[]), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn every_field_is_quoted() {
        let out = render_csv(&[spec("Login_Fails")]);
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row, "\"\",\"LoginTests\",\"Login_Fails\",\"\",\"\",\"\",\"\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut s = spec("Login_Succeeds");
        s.steps = "enter \"demo\"".to_string();
        let out = render_csv(&[s]);
        assert!(out.contains("\"enter \"\"demo\"\"\""));
    }

    #[test]
    fn multi_line_cells_keep_newlines() {
        let mut s = spec("Login_Succeeds");
        s.expected = "a\nb".to_string();
        let out = render_csv(&[s]);
        assert!(out.contains("\"a\nb\""));
        // Header line plus two physical lines of the one row.
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn quoting_round_trips_through_a_csv_reader() {
        // Minimal quoted-field reader: strip outer quotes, undouble "".
        fn unquote(field: &str) -> String {
            field
                .strip_prefix('"')
                .and_then(|f| f.strip_suffix('"'))
                .unwrap()
                .replace("\"\"", "\"")
        }

        let mut s = spec("Login_Succeeds");
        s.summary = "say \"hi\" twice, then \"bye\"".to_string();
        let out = render_csv(&[s.clone()]);
        let row = out.lines().nth(1).unwrap();
        let last_field = row.rsplit(",\"").next().map(|f| format!("\"{f}")).unwrap();
        assert_eq!(unquote(&last_field), s.summary);
    }

    #[test]
    fn rows_keep_input_order() {
        let out = render_csv(&[spec("b"), spec("a")]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("\"b\""));
        assert!(lines[2].contains("\"a\""));
    }
}
