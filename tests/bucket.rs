#[cfg(test)]
mod tests {
    use tabel::libs::bucket::{bucket_low_value, CATCH_ALL_TASK, MIN_REPORTABLE_WORKDAYS};
    use tabel::libs::window::WindowRow;

    fn row(project: &str, task: &str, workdays: f64, date: &str) -> WindowRow {
        WindowRow {
            person: "ivanov".to_string(),
            project: project.to_string(),
            task: task.to_string(),
            indicator: None,
            workdays,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_rows_at_threshold_are_kept_as_is() {
        let rows = bucket_low_value(vec![row("CloudBridge", "Task A", MIN_REPORTABLE_WORKDAYS, "10.08.2022")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].task, "Task A");
    }

    #[test]
    fn test_low_rows_merge_into_project_bucket() {
        let rows = bucket_low_value(vec![
            row("CloudBridge", "Big task", 1.5, "12.08.2022"),
            row("CloudBridge", "Tiny A", 0.1, "10.08.2022"),
            row("CloudBridge", "Tiny B", 0.15, "11.08.2022"),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task, "Big task");

        let bucket = &rows[1];
        assert_eq!(bucket.task, CATCH_ALL_TASK);
        assert_eq!(bucket.project, "CloudBridge");
        assert!((bucket.workdays - 0.25).abs() < 1e-9);
        // The bucket carries the latest touched date of its members.
        assert_eq!(bucket.date, "11.08.2022");
    }

    #[test]
    fn test_bucket_below_threshold_is_dropped() {
        let rows = bucket_low_value(vec![row("CloudBridge", "Tiny A", 0.05, "10.08.2022"), row("CloudBridge", "Tiny B", 0.1, "11.08.2022")]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_buckets_are_per_project() {
        let rows = bucket_low_value(vec![
            row("CloudBridge", "Tiny A", 0.15, "10.08.2022"),
            row("HR Tools", "Tiny B", 0.15, "11.08.2022"),
            row("CloudBridge", "Tiny C", 0.1, "09.08.2022"),
        ]);
        // CloudBridge bucket reaches 0.25 and survives; HR Tools stays at
        // 0.15 and is dropped.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project, "CloudBridge");
        assert_eq!(rows[0].task, CATCH_ALL_TASK);
        assert!((rows[0].workdays - 0.25).abs() < 1e-9);
        assert_eq!(rows[0].date, "10.08.2022");
    }

    #[test]
    fn test_empty_input() {
        assert!(bucket_low_value(Vec::new()).is_empty());
    }
}
