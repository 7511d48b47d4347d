//! Decoding of request bodies

use crate::FunctionResult;

/// Request body extractor
pub trait Extract: Sized {
    /// Convert from a request body to a value
    fn extract(payload: Vec<u8>) -> FunctionResult<Self>;
}

impl Extract for Vec<u8> {
    fn extract(payload: Vec<u8>) -> FunctionResult<Self> {
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_extraction_passes_bytes_through() {
        assert_eq!(Vec::<u8>::extract(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
    }
}
