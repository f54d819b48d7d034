//! Error types for post storage.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Opening or migrating the database failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt post record: {message}")]
    Corrupt { message: String },

    /// A read or write against an open store failed.
    #[error("Storage failure: {message}")]
    Storage { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_display() {
        let e = Error::Corrupt {
            message: "bad timestamp".to_string(),
        };
        assert!(e.to_string().contains("bad timestamp"));
    }

    #[test]
    fn sqlite_error_converts() {
        let e: Error = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(e, Error::Sqlite(_)));
        assert!(e.to_string().starts_with("SQLite error"));
    }
}
