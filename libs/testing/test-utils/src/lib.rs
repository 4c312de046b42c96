//! Test support for the items workspace
//!
//! - `TestDatabase`: migrated PostgreSQL container (feature: "postgres")
//! - `TestNames`: item names scoped to one test
//! - `assertions`: panicking checks with a context message
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestNames};
//!
//! #[tokio::test]
//! async fn creates_item() {
//!     let db = TestDatabase::new().await;
//!     let names = TestNames::new("creates_item");
//!     let name = names.item("main"); // "creates_item/main"
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

use std::fmt::Display;

/// Readable, per-test item names so failures point at the test that wrote the row
#[derive(Debug, Clone, Copy)]
pub struct TestNames<'a> {
    test: &'a str,
}

impl<'a> TestNames<'a> {
    pub fn new(test: &'a str) -> Self {
        Self { test }
    }

    /// `{test}/{label}`
    ///
    /// ```
    /// use test_utils::TestNames;
    ///
    /// assert_eq!(TestNames::new("update").item(2), "update/2");
    /// ```
    pub fn item(&self, label: impl Display) -> String {
        format!("{}/{}", self.test, label)
    }
}

pub mod assertions {
    use std::fmt::Debug;

    /// Unwrap `Some`, panicking with `context` otherwise
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Panics unless every value is greater than the one before it
    pub fn assert_strictly_increasing<T: PartialOrd + Debug>(values: &[T], context: &str) {
        if let Some(pair) = values.windows(2).find(|pair| pair[0] >= pair[1]) {
            panic!(
                "{}: {:?} is not followed by a greater value ({:?})",
                context, pair[0], pair[1]
            );
        }
    }
}
