use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetError {
    #[error("bulk operation called without a collection")]
    MissingCollection,
    #[error("table cannot grow past {capacity} slots")]
    CapacityExhausted { capacity: usize },
    #[error("no free slot among {capacity} slots")]
    TableFull { capacity: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
