use crate::domain::model::UserRecord;
use crate::domain::ports::UserStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_number;

/// Page size used when streaming rows one at a time.
pub const STREAM_PAGE_SIZE: usize = 100;
pub const DEFAULT_MIN_AGE: u32 = 25;

/// Rows of a [`UserStore`], fetched one page at a time as the iterator advances.
///
/// Starts at offset 0 and stops at the first empty page. A store error is
/// yielded once and ends the iteration.
pub struct LazyPaginator<'a, S: UserStore + ?Sized> {
    store: &'a S,
    page_size: usize,
    offset: usize,
    page: std::vec::IntoIter<UserRecord>,
    done: bool,
}

impl<'a, S: UserStore + ?Sized> LazyPaginator<'a, S> {
    fn new(store: &'a S, page_size: usize) -> Self {
        Self {
            store,
            page_size,
            offset: 0,
            page: Vec::new().into_iter(),
            done: false,
        }
    }
}

impl<S: UserStore + ?Sized> Iterator for LazyPaginator<'_, S> {
    type Item = Result<UserRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(user) = self.page.next() {
                return Some(Ok(user));
            }
            if self.done {
                return None;
            }

            tracing::debug!("Fetching page: limit {} offset {}", self.page_size, self.offset);
            match self.store.paginate(self.page_size, self.offset) {
                Ok(page) if page.is_empty() => {
                    self.done = true;
                    return None;
                }
                Ok(page) => {
                    self.offset += self.page_size;
                    self.page = page.into_iter();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Groups a row stream into `Vec`s of `batch_size`; the last batch may be shorter.
pub struct UserBatches<I> {
    rows: I,
    batch_size: usize,
    done: bool,
}

impl<I: Iterator<Item = Result<UserRecord>>> Iterator for UserBatches<I> {
    type Item = Result<Vec<UserRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut batch = Vec::with_capacity(self.batch_size.min(STREAM_PAGE_SIZE));
        while batch.len() < self.batch_size {
            match self.rows.next() {
                Some(Ok(user)) => batch.push(user),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

pub fn lazy_paginate<S: UserStore + ?Sized>(
    store: &S,
    page_size: usize,
) -> Result<LazyPaginator<'_, S>> {
    validate_positive_number("page_size", page_size, 1)?;
    Ok(LazyPaginator::new(store, page_size))
}

pub fn stream_users<S: UserStore + ?Sized>(store: &S) -> LazyPaginator<'_, S> {
    LazyPaginator::new(store, STREAM_PAGE_SIZE)
}

pub fn stream_users_in_batches<S: UserStore + ?Sized>(
    store: &S,
    batch_size: usize,
) -> Result<UserBatches<LazyPaginator<'_, S>>> {
    validate_positive_number("batch_size", batch_size, 1)?;
    Ok(UserBatches {
        rows: stream_users(store),
        batch_size,
        done: false,
    })
}

/// Users older than 25, read batch by batch.
pub fn batch_processing<S: UserStore + ?Sized>(
    store: &S,
    batch_size: usize,
) -> Result<impl Iterator<Item = Result<UserRecord>> + '_> {
    batch_processing_with_min_age(store, batch_size, DEFAULT_MIN_AGE)
}

pub fn batch_processing_with_min_age<S: UserStore + ?Sized>(
    store: &S,
    batch_size: usize,
    min_age: u32,
) -> Result<impl Iterator<Item = Result<UserRecord>> + '_> {
    let batches = stream_users_in_batches(store, batch_size)?;
    Ok(batches.flat_map(move |batch| match batch {
        Ok(users) => users
            .into_iter()
            .filter(|user| user.age > min_age)
            .map(Ok)
            .collect::<Vec<_>>(),
        Err(e) => vec![Err(e)],
    }))
}

pub fn stream_user_ages<S: UserStore + ?Sized>(
    store: &S,
) -> impl Iterator<Item = Result<u32>> + '_ {
    stream_users(store).map(|user| user.map(|u| u.age))
}

/// Mean age over all users, `None` when there are none.
pub fn average_age<S: UserStore + ?Sized>(store: &S) -> Result<Option<f64>> {
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for age in stream_user_ages(store) {
        total += u64::from(age?);
        count += 1;
    }

    if count == 0 {
        return Ok(None);
    }
    Ok(Some(total as f64 / count as f64))
}
