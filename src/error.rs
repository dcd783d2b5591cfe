use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO Error occurred: {0}")]
    IOError(std::io::Error),

    #[error("Line {line}: missing {field} coordinate.")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid coordinate '{value}': {source}.")]
    InvalidNumber {
        line: usize,
        value: String,
        source: ParseFloatError,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO Error occurred: {0}")]
    IOError(std::io::Error),
}

#[derive(Error, Debug)]
pub enum PolyError {
    #[error("[Import Error] {0}")]
    ImportError(ImportError),

    #[error("[Export Error] {0}")]
    ExportError(ExportError),
}

macro_rules! impl_from_error {
    ($class:ident) => {
        impl From<$class> for PolyError {
            fn from(val: $class) -> Self {
                PolyError::$class(val)
            }
        }
    };
}

impl_from_error!(ImportError);
impl_from_error!(ExportError);
