use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub show_column_picker: bool,
    pub enable_csv_export: bool,
    pub show_pagination_controls: bool,
    pub enable_multi_select: bool,
    pub csv_file_name: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![2, 5, 10, 20, 50],
            show_column_picker: true,
            enable_csv_export: true,
            show_pagination_controls: true,
            enable_multi_select: false,
            csv_file_name: "datos.csv".to_string(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("pageSize must be greater than zero".to_string());
        }
        if self.page_size_options.is_empty() {
            return Err("pageSizeOptions must not be empty".to_string());
        }
        if self.page_size_options.contains(&0) {
            return Err("pageSizeOptions must not contain zero".to_string());
        }
        Ok(())
    }
}
