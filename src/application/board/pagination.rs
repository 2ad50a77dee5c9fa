//! Page math and the windowed ellipsis control row.

/// One element of the page-control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A numbered page button; `current` marks the active page.
    Page { number: usize, current: bool },
    /// A collapsed run of hidden pages.
    Ellipsis,
}

/// Pages needed to show `len` records at `page_size` per page.
/// `page_size` must be non-zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Builds the page-button row: first and last page plus the window
/// `current - 1 ..= current + 1`, with each hidden run collapsed into one
/// ellipsis. A single page (or none) produces no controls at all.
///
/// When the current page sits within two of a boundary the window and the
/// boundary page overlap, and that side carries no ellipsis.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }
    let mut controls = Vec::new();
    for page in 1..=total {
        if page == 1 || page == total || page.abs_diff(current) <= 1 {
            controls.push(PageControl::Page {
                number: page,
                current: page == current,
            });
        } else if page + 2 == current || page == current + 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(controls: &[PageControl]) -> Vec<Option<usize>> {
        controls
            .iter()
            .map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn no_controls_for_a_single_page() {
        assert!(page_controls(1, 0).is_empty());
        assert!(page_controls(1, 1).is_empty());
    }

    #[test]
    fn small_page_counts_render_every_page() {
        assert_eq!(numbers(&page_controls(1, 2)), vec![Some(1), Some(2)]);
        assert_eq!(
            numbers(&page_controls(2, 4)),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn ellipsis_collapses_the_far_side_only() {
        // Current at the left boundary: window overlaps page 1, gap on the
        // right collapses at current + 2.
        assert_eq!(
            numbers(&page_controls(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_controls(10, 10)),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn middle_page_gets_an_ellipsis_on_both_sides() {
        assert_eq!(
            numbers(&page_controls(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn near_boundary_window_overlap_drops_the_ellipsis() {
        // Page 3 of 5: 1 and current-1 = 2 touch, 5 and current+1 = 4 touch.
        assert_eq!(
            numbers(&page_controls(3, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn active_page_is_marked_current() {
        let controls = page_controls(4, 6);
        let current: Vec<usize> = controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![4]);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }
}
