use crate::analyzers::{layout, spacing, typography};

#[cfg(test)]
mod typography_tests {
    use super::*;

    #[test]
    fn test_fields_ranked_by_frequency() {
        let text = "font-family: Arial, sans-serif;
font-family: Georgia, serif;
font-family: Arial, sans-serif;
font-size: 16px;
font-weight: 700;";

        let summary = typography::summarize(text);
        assert_eq!(summary.font_families, vec!["Arial, sans-serif", "Georgia, serif"]);
        assert_eq!(summary.font_sizes, vec!["16px"]);
        assert_eq!(summary.font_weights, vec!["700"]);
    }

    #[test]
    fn test_line_feeds_one_field_only() {
        // A line mentioning font-family never counts toward sizes
        let text = "font-family: Georgia; font-size: 18px;";
        let summary = typography::summarize(text);
        assert_eq!(summary.font_families, vec!["Georgia"]);
        assert!(summary.font_sizes.is_empty());
    }

    #[test]
    fn test_top_three_cap() {
        let text = "font-size: 12px;
font-size: 14px;
font-size: 16px;
font-size: 18px;";
        let summary = typography::summarize(text);
        assert_eq!(summary.font_sizes.len(), 3);
        // Equal counts keep first-seen order
        assert_eq!(summary.font_sizes, vec!["12px", "14px", "16px"]);
    }
}

#[cfg(test)]
mod spacing_tests {
    use super::*;

    #[test]
    fn test_pixel_values_collected() {
        let text = "margin-top: 16px;
margin: 8px 16px;
padding: 20px;";

        let summary = spacing::summarize(text);
        assert_eq!(summary.common_margins, vec!["16px", "8px"]);
        assert_eq!(summary.common_paddings, vec!["20px"]);
    }

    #[test]
    fn test_auto_margins_are_skipped() {
        // The whole line is skipped, including its pixel values
        let text = "margin: 10px auto;";
        let summary = spacing::summarize(text);
        assert!(summary.common_margins.is_empty());
    }

    #[test]
    fn test_top_five_cap() {
        let lines: Vec<String> = (1..=6).map(|i| format!("padding: {}px;", i)).collect();
        let summary = spacing::summarize(&lines.join("\n"));
        assert_eq!(summary.common_paddings.len(), 5);
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_display_position_and_float_tallies() {
        let text = "display: flex;
display: flex;
display: grid;
position: absolute;
float: left;";

        let methods = layout::summarize(text);
        assert_eq!(methods.get("flex"), Some(&2));
        assert_eq!(methods.get("grid"), Some(&1));
        assert_eq!(methods.get("absolute"), Some(&1));
        assert_eq!(methods.get("float"), Some(&1));
        assert_eq!(methods.get("block"), None);
    }

    #[test]
    fn test_inline_block_does_not_count_as_block() {
        let methods = layout::summarize("display: inline-block;");
        assert_eq!(methods.get("inline-block"), Some(&1));
        assert_eq!(methods.get("block"), None);
    }

    #[test]
    fn test_unlisted_values_are_ignored() {
        let methods = layout::summarize("display: table;\nposition: static;");
        assert!(methods.is_empty());
    }

    #[test]
    fn test_dominant_method() {
        let methods = layout::summarize("display: grid;\ndisplay: grid;\ndisplay: flex;");
        assert_eq!(layout::dominant_method(&methods), "grid");

        // Ties resolve in the fixed flex, grid, block, inline-block order
        let tied = layout::summarize("display: grid;\ndisplay: flex;");
        assert_eq!(layout::dominant_method(&tied), "flex");

        // No display tallies at all falls back to block
        let empty = layout::summarize("position: absolute;");
        assert_eq!(layout::dominant_method(&empty), "block");
    }
}
