//! Split a newest-first feed into the featured item and the rest

/// A feed split into its featured head and the remaining items
#[derive(Debug, PartialEq)]
pub struct FeedPartition<'a, T> {
    /// First item, absent for an empty feed
    pub head: Option<&'a T>,
    /// Everything after the head, in feed order
    pub tail: &'a [T],
}

/// Split `items` into `(head, tail)` without copying.
///
/// # Examples
/// ```
/// use devportal::feed::partition;
///
/// let feed = [1, 2, 3];
/// let split = partition(&feed);
/// assert_eq!(split.head, Some(&1));
/// assert_eq!(split.tail, &[2, 3]);
/// ```
pub fn partition<T>(items: &[T]) -> FeedPartition<'_, T> {
    match items.split_first() {
        Some((head, tail)) => FeedPartition {
            head: Some(head),
            tail,
        },
        None => FeedPartition {
            head: None,
            tail: &[],
        },
    }
}
