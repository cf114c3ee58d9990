use std::{
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaplingError {
    EmptyHeapExtraction,
    EmptyListDeletion,
}

impl Display for HeaplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaplingError::EmptyHeapExtraction => {
                write!(f, "Cannot extract the maximum of an empty heap")
            }
            HeaplingError::EmptyListDeletion => {
                write!(f, "Cannot delete the head of an empty list")
            }
        }
    }
}

impl std::error::Error for HeaplingError {}

pub fn as_io_error(error: HeaplingError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}
