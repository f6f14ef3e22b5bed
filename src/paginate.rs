// src/paginate.rs

/// Fixed page size for question listings. A deployment constant, not a
/// request parameter.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items` as a sub-slice.
///
/// The input order is the caller's; nothing is sorted here. Pages past the
/// end come back empty, which callers may or may not treat as not-found.
/// `page = 0` is clamped to the first page rather than panicking.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_are_clamped_to_length() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(paginate(&items, 1, 10).len(), 10);
        assert_eq!(paginate(&items, 2, 10).len(), 10);
        assert_eq!(paginate(&items, 3, 10), &[20, 21, 22, 23, 24]);
        assert_eq!(paginate(&items, 4, 10), &[] as &[i32]);
    }

    #[test]
    fn concatenated_pages_reconstruct_the_input() {
        let items: Vec<i32> = (0..37).collect();
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let slice = paginate(&items, page, 10);
            if slice.is_empty() {
                break;
            }
            rebuilt.extend_from_slice(slice);
            page += 1;
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let items: Vec<i32> = Vec::new();
        assert_eq!(paginate(&items, 1, 10), &[] as &[i32]);
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let items: Vec<i32> = (0..5).collect();
        assert_eq!(paginate(&items, 0, 10), paginate(&items, 1, 10));
    }
}
