//! Pagination controls.

use serde::{Deserialize, Serialize};

/// Page counts up to this size list every page without ellipses.
const SHOW_ALL_MAX: usize = 7;

/// One entry in the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLink {
    /// A page number, flagged when it is the current page
    Page {
        /// 1-based page number
        number: usize,
        /// Whether this is the current page
        current: bool,
    },
    /// Skipped pages
    Ellipsis,
}

/// Previous/next buttons plus a windowed list of page links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    /// Current 1-based page
    pub page: usize,
    /// Total page count, at least 1
    pub total_pages: usize,
    /// Whether "Previous" is enabled
    pub has_previous: bool,
    /// Whether "Next" is enabled
    pub has_next: bool,
    /// Page links: first, last and the current page's neighbours
    pub links: Vec<PageLink>,
}

impl PaginationControls {
    /// Build controls for `page` of `total_pages`. Inputs are clamped.
    #[must_use]
    pub fn new(page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let page = page.clamp(1, total_pages);
        Self {
            page,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
            links: Self::window(page, total_pages),
        }
    }

    fn window(page: usize, total: usize) -> Vec<PageLink> {
        let link = |number| PageLink::Page {
            number,
            current: number == page,
        };
        if total <= SHOW_ALL_MAX {
            return (1..=total).map(link).collect();
        }

        let start = page.saturating_sub(1).max(2);
        let end = (page + 1).min(total - 1);

        let mut links = vec![link(1)];
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
        links.extend((start..=end).map(link));
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(link(total));
        links
    }

    /// Page numbers shown, skipping ellipses.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<usize> {
        self.links
            .iter()
            .filter_map(|l| match l {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    /// Status line, e.g. `Page 2 of 5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let controls = PaginationControls::new(1, 1);
        assert!(!controls.has_previous);
        assert!(!controls.has_next);
        assert_eq!(
            controls.links,
            vec![PageLink::Page {
                number: 1,
                current: true
            }]
        );
    }

    #[test]
    fn test_zero_total_is_one_page() {
        let controls = PaginationControls::new(0, 0);
        assert_eq!(controls.page, 1);
        assert_eq!(controls.total_pages, 1);
    }

    #[test]
    fn test_page_clamped() {
        let controls = PaginationControls::new(9, 3);
        assert_eq!(controls.page, 3);
        assert!(controls.has_previous);
        assert!(!controls.has_next);
    }

    #[test]
    fn test_small_total_lists_every_page() {
        let controls = PaginationControls::new(4, 7);
        assert_eq!(controls.page_numbers(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!controls.links.contains(&PageLink::Ellipsis));
    }

    #[test]
    fn test_window_middle() {
        let controls = PaginationControls::new(10, 20);
        assert_eq!(
            controls.links,
            vec![
                PageLink::Page { number: 1, current: false },
                PageLink::Ellipsis,
                PageLink::Page { number: 9, current: false },
                PageLink::Page { number: 10, current: true },
                PageLink::Page { number: 11, current: false },
                PageLink::Ellipsis,
                PageLink::Page { number: 20, current: false },
            ]
        );
    }

    #[test]
    fn test_window_near_start() {
        let controls = PaginationControls::new(2, 20);
        assert_eq!(controls.page_numbers(), vec![1, 2, 3, 20]);
        assert_eq!(controls.links[3], PageLink::Ellipsis);
    }

    #[test]
    fn test_window_at_end() {
        let controls = PaginationControls::new(20, 20);
        assert_eq!(controls.page_numbers(), vec![1, 19, 20]);
        assert_eq!(controls.links[1], PageLink::Ellipsis);
    }

    #[test]
    fn test_label() {
        assert_eq!(PaginationControls::new(2, 5).label(), "Page 2 of 5");
    }
}
