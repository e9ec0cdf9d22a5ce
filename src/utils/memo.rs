use crate::utils::error::Result;
use std::future::Future;
use tokio::sync::OnceCell;

/// A value computed at most once for the struct that owns it.
///
/// Embed one per memoized accessor. The first successful computation is kept
/// for the owner's lifetime; errors are returned but not stored, so the next
/// access tries again. Concurrent first accesses wait on a single computation.
#[derive(Debug)]
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub async fn get_or_try_compute<F, Fut>(&self, compute: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.cell.get_or_try_init(compute).await
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::OrgReposError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counted {
        calls: AtomicUsize,
        fail_first: bool,
        property: Memoized<u32>,
    }

    impl Counted {
        fn new(fail_first: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first,
                property: Memoized::new(),
            }
        }

        async fn a_method(&self) -> Result<u32> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_first && n == 0 {
                return Err(OrgReposError::ConfigError {
                    message: "first call fails".to_string(),
                });
            }
            Ok(42)
        }

        async fn a_property(&self) -> Result<u32> {
            self.property
                .get_or_try_compute(|| self.a_method())
                .await
                .copied()
        }
    }

    #[tokio::test]
    async fn test_memoize_computes_once() {
        let obj = Counted::new(false);
        assert!(!obj.property.is_computed());

        assert_eq!(obj.a_property().await.unwrap(), 42);
        assert_eq!(obj.a_property().await.unwrap(), 42);

        assert_eq!(obj.calls.load(Ordering::SeqCst), 1);
        assert_eq!(obj.property.get(), Some(&42));
    }

    #[tokio::test]
    async fn test_concurrent_first_access_computes_once() {
        let obj = Counted::new(false);

        let (a, b, c) = tokio::join!(obj.a_property(), obj.a_property(), obj.a_property());

        assert_eq!((a.unwrap(), b.unwrap(), c.unwrap()), (42, 42, 42));
        assert_eq!(obj.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_access_across_tasks() {
        let obj = std::sync::Arc::new(Counted::new(false));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let obj = obj.clone();
                tokio::spawn(async move { obj.a_property().await.unwrap() })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), 42);
        }

        assert_eq!(obj.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fresh_instance_starts_uncached() {
        let first = Counted::new(false);
        first.a_property().await.unwrap();

        let second = Counted::new(false);
        assert!(second.property.get().is_none());
        second.a_property().await.unwrap();
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let obj = Counted::new(true);
        assert!(obj.a_property().await.is_err());
        assert!(!obj.property.is_computed());

        assert_eq!(obj.a_property().await.unwrap(), 42);
        assert_eq!(obj.a_property().await.unwrap(), 42);
        assert_eq!(obj.calls.load(Ordering::SeqCst), 2);
    }
}
