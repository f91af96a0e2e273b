#[cfg(test)]
mod tests {
    use tabel::libs::markup::{class_blocks, field, first_block, first_class_block, text, MarkupSchema, SchemaVersion};

    #[test]
    fn test_class_marker_matches_hashed_suffix() {
        // CSS-module builds append a hash; the marker is a prefix match.
        let html = r#"<div class="monthDay__ad9 extra">inner</div>"#;
        let blocks = class_blocks(html, "div", "monthDay");
        assert_eq!(blocks, vec!["inner"]);
    }

    #[test]
    fn test_class_marker_ignores_unrelated_classes() {
        let html = r#"<div class="sidebar monthTotal__1fc">nope</div><div class="monthDay__ad9">yes</div>"#;
        let blocks = class_blocks(html, "div", "monthDay");
        assert_eq!(blocks, vec!["yes"]);
    }

    #[test]
    fn test_nested_same_tag_blocks() {
        let html = r#"<div class="card__a"><div><div>deep</div></div>tail</div>"#;
        let blocks = class_blocks(html, "div", "card");
        assert_eq!(blocks, vec!["<div><div>deep</div></div>tail"]);
    }

    #[test]
    fn test_multiple_blocks_in_page_order() {
        let html = r#"<div class="day__1">first</div><p>noise</p><div class="day__2">second</div>"#;
        let blocks = class_blocks(html, "div", "day");
        assert_eq!(blocks, vec!["first", "second"]);
    }

    #[test]
    fn test_case_insensitive_tags_and_single_quotes() {
        let html = "<DIV class='day__x'>ok</DIV>";
        assert_eq!(first_class_block(html, "div", "day"), Some("ok"));
    }

    #[test]
    fn test_self_closing_tags_are_skipped() {
        let html = r#"<div class="day__x"/><div class="day__y">kept</div>"#;
        let blocks = class_blocks(html, "div", "day");
        assert_eq!(blocks, vec!["kept"]);
    }

    #[test]
    fn test_gt_inside_attribute_value() {
        let html = r#"<div class="day__x" title="a > b">ok</div>"#;
        assert_eq!(first_class_block(html, "div", "day"), Some("ok"));
    }

    #[test]
    fn test_first_block_descends_regardless_of_attributes() {
        let html = r#"<span data-x="1"><b>t</b></span>"#;
        assert_eq!(first_block(html, "span"), Some("<b>t</b>"));
    }

    #[test]
    fn test_field_path_resolution() {
        let schema = MarkupSchema::for_version(SchemaVersion::V2022);
        let card = r##"<div><p>2ч</p><a href="#"><span><div><span>CB-12</span></div></span></a></div>"##;
        assert_eq!(text(field(card, &schema.elapsed).unwrap()), "2ч");
        assert_eq!(text(field(card, &schema.task_key).unwrap()), "CB-12");
    }

    #[test]
    fn test_field_path_mismatch_names_the_field() {
        let schema = MarkupSchema::for_version(SchemaVersion::V2022);
        let broken = r##"<div><a href="#"><em>no span chain</em></a></div>"##;
        let err = field(broken, &schema.task_key).unwrap_err();
        assert!(err.to_string().contains("task identifier"));
    }

    #[test]
    fn test_text_strips_tags_and_collapses_whitespace() {
        assert_eq!(text("<span>  2ч\n  30м </span>"), "2ч 30м");
    }

    #[test]
    fn test_text_decodes_entities() {
        assert_eq!(text("Fix &amp; ship &lt;v2&gt;"), "Fix & ship <v2>");
        assert_eq!(text("&#1095;&#x447;"), "чч");
        // Unknown entities pass through verbatim.
        assert_eq!(text("a &unknown; b"), "a &unknown; b");
    }

    #[test]
    fn test_schema_versions_use_distinct_markers() {
        let v2022 = MarkupSchema::for_version(SchemaVersion::V2022);
        let v2023 = MarkupSchema::for_version(SchemaVersion::V2023);
        assert_eq!(v2022.day_class, "monthDay");
        assert_eq!(v2023.day_class, "calendarDay");
        assert_ne!(v2022.task_key.steps, v2023.task_key.steps);
    }
}
