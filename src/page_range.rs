use std::collections::BTreeSet;

/// Parse a page range expression like "1-3, 5, 8-10" into the ascending,
/// deduplicated list of 1-based page numbers it selects within a document
/// of `total_pages` pages.
///
/// Tokens that fail to parse, and pages that fall outside
/// `1..=total_pages`, are dropped silently: a partially bad expression
/// still yields the pages that could be understood. Range bounds may be
/// given in either order ("5-2" selects the same pages as "2-5").
pub fn parse_selection(expression: &str, total_pages: u32) -> Vec<u32> {
    let mut selected = BTreeSet::new();

    if total_pages == 0 {
        return Vec::new();
    }

    for token in expression.split(',') {
        let token = token.trim();

        if token.contains('-') {
            // Only the first two hyphen-separated parts count; "1-3-5"
            // reads as 1-3, while an empty side ("3--5") drops the token.
            let mut parts = token.split('-');
            let start = parts.next().unwrap_or("").trim().parse::<u32>();
            let end = parts.next().unwrap_or("").trim().parse::<u32>();
            let (Ok(start), Ok(end)) = (start, end) else {
                continue;
            };

            let lower = start.min(end).max(1);
            let upper = start.max(end).min(total_pages);
            for page in lower..=upper {
                selected.insert(page);
            }
        } else if let Ok(page) = token.parse::<u32>() {
            if (1..=total_pages).contains(&page) {
                selected.insert(page);
            }
        }
    }

    selected.into_iter().collect()
}

/// Expression selecting every page: "1-N".
pub fn all_pages(total_pages: u32) -> String {
    if total_pages == 0 {
        return String::new();
    }
    format!("1-{total_pages}")
}

/// Expression selecting the odd-numbered pages as a comma list.
pub fn odd_pages(total_pages: u32) -> String {
    join_pages((1..=total_pages).step_by(2))
}

/// Expression selecting the even-numbered pages as a comma list.
pub fn even_pages(total_pages: u32) -> String {
    join_pages((2..=total_pages).step_by(2))
}

/// Expression selecting only the first page.
pub fn first_page(total_pages: u32) -> String {
    if total_pages == 0 {
        return String::new();
    }
    "1".to_string()
}

/// Expression selecting only the last page.
pub fn last_page(total_pages: u32) -> String {
    if total_pages == 0 {
        return String::new();
    }
    total_pages.to_string()
}

fn join_pages(pages: impl Iterator<Item = u32>) -> String {
    pages
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_expression_selects_nothing() {
        assert_eq!(parse_selection("", 10), Vec::<u32>::new());
        assert_eq!(parse_selection("   ", 10), Vec::<u32>::new());
    }

    #[test]
    fn zero_total_selects_nothing() {
        assert_eq!(parse_selection("1-5", 0), Vec::<u32>::new());
    }

    #[test]
    fn simple_range() {
        assert_eq!(parse_selection("1-5", 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reversed_range_bounds() {
        assert_eq!(parse_selection("5-1", 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn singles_sorted_regardless_of_input_order() {
        assert_eq!(parse_selection("3, 1, 2", 10), vec![1, 2, 3]);
    }

    #[test]
    fn overlapping_ranges_deduplicate() {
        assert_eq!(parse_selection("1-3, 2-5", 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn invalid_tokens_dropped_silently() {
        assert_eq!(parse_selection("0, -1, abc, 100", 10), Vec::<u32>::new());
    }

    #[test]
    fn out_of_range_single_dropped() {
        assert_eq!(parse_selection("7", 5), Vec::<u32>::new());
    }

    #[test]
    fn range_clamped_to_document() {
        assert_eq!(parse_selection("8-15", 10), vec![8, 9, 10]);
        assert_eq!(parse_selection("0-3", 10), vec![1, 2, 3]);
    }

    #[test]
    fn range_entirely_outside_contributes_nothing() {
        assert_eq!(parse_selection("11-15", 10), Vec::<u32>::new());
    }

    #[test]
    fn malformed_range_side_drops_whole_token() {
        assert_eq!(parse_selection("1-x, 4", 10), vec![4]);
        assert_eq!(parse_selection("y-3", 10), Vec::<u32>::new());
    }

    #[test]
    fn double_hyphen_drops_token() {
        assert_eq!(parse_selection("3--5", 10), Vec::<u32>::new());
        assert_eq!(parse_selection("3--5, 8", 10), vec![8]);
    }

    #[test]
    fn extra_hyphen_parts_are_ignored() {
        assert_eq!(parse_selection("1-3-5", 10), vec![1, 2, 3]);
    }

    #[test]
    fn whitespace_around_tokens_ignored() {
        assert_eq!(parse_selection(" 2 - 4 , 7 ", 10), vec![2, 3, 4, 7]);
    }

    #[test]
    fn parse_is_deterministic() {
        let a = parse_selection("9, 3-6, 3", 12);
        let b = parse_selection("9, 3-6, 3", 12);
        assert_eq!(a, b);
        assert_eq!(a, vec![3, 4, 5, 6, 9]);
    }

    #[test]
    fn shortcut_all() {
        assert_eq!(all_pages(7), "1-7");
        assert_eq!(all_pages(0), "");
    }

    #[test]
    fn shortcut_odd_even() {
        assert_eq!(odd_pages(6), "1, 3, 5");
        assert_eq!(even_pages(6), "2, 4, 6");
        assert_eq!(odd_pages(0), "");
        assert_eq!(even_pages(1), "");
    }

    #[test]
    fn shortcut_first_last() {
        assert_eq!(first_page(9), "1");
        assert_eq!(last_page(9), "9");
        assert_eq!(first_page(0), "");
        assert_eq!(last_page(0), "");
    }

    #[test]
    fn shortcuts_round_trip_through_parser() {
        assert_eq!(parse_selection(&all_pages(4), 4), vec![1, 2, 3, 4]);
        assert_eq!(parse_selection(&odd_pages(5), 5), vec![1, 3, 5]);
        assert_eq!(parse_selection(&even_pages(5), 5), vec![2, 4]);
    }
}
