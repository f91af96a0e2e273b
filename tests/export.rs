#[cfg(test)]
mod tests {
    use tabel::libs::export::{format_workdays, ExportFormat, Exporter, COMBINED_FILE_STEM};
    use tabel::libs::report::ReportTable;
    use tabel::libs::window::WindowRow;
    use tempfile::TempDir;

    fn sample_table() -> ReportTable {
        ReportTable {
            rows: vec![
                WindowRow {
                    person: "ivanov".to_string(),
                    project: "CloudBridge".to_string(),
                    task: "Fix login flow".to_string(),
                    indicator: None,
                    workdays: 1.5,
                    date: "12.08.2022".to_string(),
                },
                WindowRow {
                    person: "ivanov".to_string(),
                    project: "CloudBridge".to_string(),
                    task: "Other".to_string(),
                    indicator: None,
                    workdays: 0.25,
                    date: "11.08.2022".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportFormat::Csv, temp_dir.path().to_path_buf());

        let path = exporter.export_person("ivanov", &sample_table()).unwrap();
        assert_eq!(path, temp_dir.path().join("ivanov.csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Employee,Project,Task,Indicator,Workdays,Date"));
        assert_eq!(lines.next(), Some("ivanov,CloudBridge,Fix login flow,,1.50,12.08.2022"));
        assert_eq!(lines.next(), Some("ivanov,CloudBridge,Other,,0.25,11.08.2022"));
    }

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportFormat::Json, temp_dir.path().to_path_buf());

        let path = exporter.export_person("ivanov", &sample_table()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<WindowRow> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows, sample_table().rows);
    }

    #[test]
    fn test_export_excel() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportFormat::Excel, temp_dir.path().to_path_buf());

        let path = exporter.export_person("ivanov", &sample_table()).unwrap();
        assert_eq!(path, temp_dir.path().join("ivanov.xlsx"));
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_combined() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportFormat::Csv, temp_dir.path().to_path_buf());

        let path = exporter.export_combined(&sample_table()).unwrap();
        assert_eq!(path, temp_dir.path().join(format!("{}.csv", COMBINED_FILE_STEM)));
    }

    #[test]
    fn test_export_creates_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("results").join("2022-08");
        let exporter = Exporter::new(ExportFormat::Json, nested.clone());

        exporter.export_person("ivanov", &sample_table()).unwrap();
        assert!(nested.join("ivanov.json").exists());
    }

    #[test]
    fn test_format_workdays_two_decimals() {
        assert_eq!(format_workdays(3.0), "3.00");
        assert_eq!(format_workdays(0.25), "0.25");
        assert_eq!(format_workdays(1.125), "1.13");
    }

    #[test]
    fn test_export_empty_table_still_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(ExportFormat::Csv, temp_dir.path().to_path_buf());

        let path = exporter.export_person("nobody", &ReportTable::new()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "Employee,Project,Task,Indicator,Workdays,Date");
    }
}
