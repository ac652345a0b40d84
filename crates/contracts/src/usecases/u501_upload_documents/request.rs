/// Multipart field carrying the uploaded documents
pub const DOCUMENT_FILES_FIELD: &str = "files";

/// Multipart field carrying a spreadsheet
pub const SPREADSHEET_FILE_FIELD: &str = "file";

/// Form fields sent with a spreadsheet import.
/// Sent as multipart text parts next to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcelImportRequest {
    /// Column holding the document text (required)
    pub text_column: String,

    /// Column holding the title, empty for "Ligne N"
    pub title_column: String,

    /// First row to import, 1-based
    pub start_row: u32,

    /// Last row to import, 0 = up to the end
    pub end_row: u32,
}

impl Default for ExcelImportRequest {
    fn default() -> Self {
        Self {
            text_column: String::new(),
            title_column: String::new(),
            start_row: 1,
            end_row: 0,
        }
    }
}

impl ExcelImportRequest {
    /// Text parts of the multipart body, in sending order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("text_column", self.text_column.clone()),
            ("title_column", self.title_column.clone()),
            ("start_row", self.start_row.to_string()),
            ("end_row", self.end_row.to_string()),
        ]
    }

    /// Parses a row input, keeping `default` for empty or invalid input
    pub fn parse_row(input: &str, default: u32) -> u32 {
        input.trim().parse().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_import_everything() {
        let req = ExcelImportRequest {
            text_column: "Texte".into(),
            ..Default::default()
        };
        let fields = req.form_fields();
        assert_eq!(fields[2], ("start_row", "1".to_string()));
        assert_eq!(fields[3], ("end_row", "0".to_string()));
    }

    #[test]
    fn test_parse_row() {
        assert_eq!(ExcelImportRequest::parse_row(" 12 ", 1), 12);
        assert_eq!(ExcelImportRequest::parse_row("", 1), 1);
        assert_eq!(ExcelImportRequest::parse_row("abc", 0), 0);
    }
}
