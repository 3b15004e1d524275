//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with a centered header
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct FieldRow {
        #[tabled(rename = "FIELD")]
        field: &'static str,
        #[tabled(rename = "VALUE")]
        value: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<FieldRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            FieldRow {
                field: "Stars",
                value: "42".to_string(),
            },
            FieldRow {
                field: "Forks",
                value: "7".to_string(),
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("FIELD"));
        assert!(result.contains("VALUE"));
        assert!(result.contains("Stars"));
        assert!(result.contains("42"));
        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
