//! Pagination and batching helpers.

use crate::model::Page;
use anyhow::Result;
use log::trace;

/// Collect the items of `first_page` and of every page after it.
///
/// `next` is asked for the page following the one it is given and returns
/// `Ok(None)` once the listing is exhausted. Any error aborts collection.
pub fn get_all_items<T, F>(first_page: Page<T>, mut next: F) -> Result<Vec<T>>
where
    F: FnMut(&Page<T>) -> Result<Option<Page<T>>>,
{
    let mut current = Some(first_page);
    let mut all_items = Vec::new();
    let mut pages = 0usize;

    while let Some(mut page) = current {
        pages += 1;
        let following = next(&page)?;
        all_items.append(&mut page.items);
        current = following;
    }

    trace!("Collected {} items from {pages} page(s)", all_items.len());
    Ok(all_items)
}

/// Split `items` into chunks of at most `size`. The last chunk may be shorter.
///
/// A `size` of zero is treated as one.
#[must_use]
pub fn batched<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page<u32>> {
        vec![
            Page { items: vec![1, 2], offset: 0, next: Some(2) },
            Page { items: vec![3, 4], offset: 2, next: Some(4) },
            Page { items: vec![5], offset: 4, next: None },
        ]
    }

    #[test]
    fn test_collects_every_page_in_order() -> Result<()> {
        let all = pages();
        let items = get_all_items(all[0].clone(), |page| {
            Ok(page.next.map(|offset| all[offset / 2].clone()))
        })?;
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_single_page() -> Result<()> {
        let items = get_all_items(Page::last(vec!["a"]), |_| Ok(None))?;
        assert_eq!(items, vec!["a"]);
        Ok(())
    }

    #[test]
    fn test_page_failure_is_fatal() {
        let all = pages();
        let result = get_all_items(all[0].clone(), |page| {
            if page.offset == 2 {
                anyhow::bail!("connection reset");
            }
            Ok(page.next.map(|offset| all[offset / 2].clone()))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_batched() {
        let ids: Vec<u32> = (0..250).collect();
        let batches = batched(&ids, 100);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 100);
        assert_eq!(batches[2].len(), 50);
        assert_eq!(batches[2][0], 200);

        assert!(batched::<u32>(&[], 100).is_empty());
        assert_eq!(batched(&[1, 2, 3], 0).len(), 3);
    }
}
