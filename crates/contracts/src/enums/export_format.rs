use serde::{Deserialize, Serialize};

/// Формат выгрузки, поддерживаемый эндпоинтом `{resource}/export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Расширение файла для скачивания
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    /// Имя скачиваемого файла, например `brands.xlsx`
    pub fn file_name(&self, resource: &str) -> String {
        format!("{}.{}", resource, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_uses_extension() {
        assert_eq!(ExportFormat::Excel.file_name("brands"), "brands.xlsx");
        assert_eq!(ExportFormat::Pdf.file_name("categories"), "categories.pdf");
    }

    #[test]
    fn test_wire_name_matches_as_str() {
        assert_eq!(serde_json::to_string(&ExportFormat::Excel).unwrap(), "\"excel\"");
        assert_eq!(ExportFormat::Pdf.as_str(), "pdf");
    }
}
