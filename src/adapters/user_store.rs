use crate::domain::model::UserRecord;
use crate::domain::ports::UserStore;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Ordered user rows held in memory, seeded from a `user_id,name,email,age` CSV.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    rows: Vec<UserRecord>,
    ids: HashSet<String>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append `record` unless a row with the same `user_id` exists.
    pub fn insert_if_absent(&mut self, record: UserRecord) -> bool {
        if !self.ids.insert(record.user_id.clone()) {
            tracing::debug!("Skipping existing user_id {}", record.user_id);
            return false;
        }
        self.rows.push(record);
        true
    }

    pub fn seed_from_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = std::fs::File::open(path.as_ref())?;
        let inserted = self.seed_from_reader(file)?;
        tracing::info!(
            "Seeded {} users from {}",
            inserted,
            path.as_ref().display()
        );
        Ok(inserted)
    }

    /// Returns how many rows were new.
    pub fn seed_from_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut inserted = 0;
        for row in csv_reader.deserialize::<UserRecord>() {
            if self.insert_if_absent(row?) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

impl UserStore for InMemoryUserStore {
    fn paginate(&self, page_size: usize, offset: usize) -> Result<Vec<UserRecord>> {
        Ok(self
            .rows
            .iter()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect())
    }
}
