#[cfg(test)]
mod tests {
    use tabel::libs::duration::unit_table;
    use tabel::libs::markup::{MarkupSchema, SchemaVersion};
    use tabel::libs::timesheet::{balance_to_norm, day_date, extract_task, parse_day, DayAggregate};

    /// One work item card in the 2022 export markup.
    fn task_html(elapsed: &str, key: &str) -> String {
        format!(
            r##"<div class="workItemCard__14a"><div><p>{}</p><a href="#"><span><div><span>{}</span></div></span></a></div></div>"##,
            elapsed, key
        )
    }

    /// One day unit in the 2022 export markup.
    fn day_html(date: u32, cards: &[String]) -> String {
        format!(r#"<p class="monthDayDate__411">{}</p>{}"#, date, cards.join(""))
    }

    fn schema() -> &'static MarkupSchema {
        MarkupSchema::for_version(SchemaVersion::V2022)
    }

    #[test]
    fn test_day_date() {
        let day = day_html(9, &[]);
        assert_eq!(day_date(&day, schema()).unwrap(), 9);
    }

    #[test]
    fn test_day_date_rejects_non_numeric() {
        let day = r#"<p class="monthDayDate__411">Mon</p>"#;
        assert!(day_date(day, schema()).is_err());
    }

    #[test]
    fn test_extract_task() {
        let card = task_html("2ч 30м", "CB-12");
        let units = unit_table(8);
        // extract_task works on the card's inner markup.
        let inner = tabel::libs::markup::first_class_block(&card, "div", "workItemCard").unwrap();
        let record = extract_task(inner, schema(), &units).unwrap();
        assert_eq!(record.key, "CB-12");
        assert_eq!(record.minutes, 150);
    }

    #[test]
    fn test_extract_task_rejects_empty_key() {
        let card = task_html("1ч", "");
        let units = unit_table(8);
        let inner = tabel::libs::markup::first_class_block(&card, "div", "workItemCard").unwrap();
        assert!(extract_task(inner, schema(), &units).is_err());
    }

    #[test]
    fn test_parse_day_sums_repeated_tasks() {
        let day = day_html(9, &[task_html("1ч", "CB-12"), task_html("1ч", "CB-12"), task_html("30м", "HR-3")]);
        let units = unit_table(8);
        let tasks = parse_day(&day, schema(), &units).unwrap();
        assert_eq!(tasks.get("CB-12"), Some(&120));
        assert_eq!(tasks.get("HR-3"), Some(&30));
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_parse_day_with_no_cards() {
        let day = day_html(9, &[]);
        let units = unit_table(8);
        assert!(parse_day(&day, schema(), &units).unwrap().is_empty());
    }

    #[test]
    fn test_balance_spreads_shortfall_evenly() {
        // 60 + 120 = 180 against an 8-hour norm: 300 missing minutes,
        // 150 added to each task.
        let mut tasks = DayAggregate::from([("A-1".to_string(), 60), ("B-2".to_string(), 120)]);
        balance_to_norm(&mut tasks, 480);
        assert_eq!(tasks.get("A-1"), Some(&210));
        assert_eq!(tasks.get("B-2"), Some(&270));
        assert_eq!(tasks.values().sum::<i64>(), 480);
    }

    #[test]
    fn test_balance_handles_overshoot() {
        let mut tasks = DayAggregate::from([("A-1".to_string(), 300), ("B-2".to_string(), 300)]);
        balance_to_norm(&mut tasks, 480);
        assert_eq!(tasks.values().sum::<i64>(), 480);
        assert_eq!(tasks.get("A-1"), Some(&240));
    }

    #[test]
    fn test_balance_remainder_stays_integral() {
        // 100 missing minutes over three tasks: 34, 33, 33 in key order.
        let mut tasks = DayAggregate::from([("A-1".to_string(), 100), ("B-2".to_string(), 140), ("C-3".to_string(), 140)]);
        balance_to_norm(&mut tasks, 480);
        assert_eq!(tasks.get("A-1"), Some(&134));
        assert_eq!(tasks.get("B-2"), Some(&173));
        assert_eq!(tasks.get("C-3"), Some(&173));
        assert_eq!(tasks.values().sum::<i64>(), 480);
    }

    #[test]
    fn test_balance_leaves_exact_norm_untouched() {
        let mut tasks = DayAggregate::from([("A-1".to_string(), 480)]);
        balance_to_norm(&mut tasks, 480);
        assert_eq!(tasks.get("A-1"), Some(&480));
    }

    #[test]
    fn test_balance_skips_empty_and_zero_days() {
        let mut empty = DayAggregate::new();
        balance_to_norm(&mut empty, 480);
        assert!(empty.is_empty());

        let mut zeroed = DayAggregate::from([("A-1".to_string(), 0)]);
        balance_to_norm(&mut zeroed, 480);
        assert_eq!(zeroed.get("A-1"), Some(&0));
    }
}
