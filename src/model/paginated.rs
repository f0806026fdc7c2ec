use serde::{Deserialize, Serialize};

/// One page of a larger collection plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub list: Vec<T>,
    pub count: u64,
}

impl<T> Default for PaginatedResult<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            count: 0,
        }
    }
}

impl<T> PaginatedResult<T> {
    pub fn new(list: Vec<T>, count: u64) -> Self {
        Self { list, count }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Checks that the total is not smaller than the page itself.
    pub fn validate(&self) -> Result<(), String> {
        if self.count < self.list.len() as u64 {
            return Err(format!(
                "count {} is smaller than the {} listed items",
                self.count,
                self.list.len()
            ));
        }
        Ok(())
    }
}
