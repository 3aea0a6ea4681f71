


use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

use crate::constants::{CONVERSION_EXISTS, DUPLICATE_KEY_ERROR_CODE, NOT_FOUND_CONVERSION};



// every failure of the conversion state store is returned, never thrown;
// storage failures pass through unmodified inside the Store variant so the
// caller can branch between "confirmed absent" and "could not determine"
#[derive(Debug, Error)]
pub enum StateError{
    #[error("{}", CONVERSION_EXISTS)]
    AlreadyExists,
    #[error("{}", NOT_FOUND_CONVERSION)]
    NotFound,
    #[error("storage error: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl StateError{

    /// true iff this is a storage failure caused by the unique `_id`
    /// index inside the collection rejecting a write
    pub fn is_duplicate_key(&self) -> bool{
        match self{
            StateError::Store(err) => matches!(
                err.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_ERROR_CODE
            ),
            _ => false,
        }
    }

}



#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn error_messages_use_the_shared_constants(){
        assert_eq!(StateError::AlreadyExists.to_string(), CONVERSION_EXISTS);
        assert_eq!(StateError::NotFound.to_string(), NOT_FOUND_CONVERSION);
    }

    #[test]
    fn only_storage_failures_can_be_duplicate_keys(){
        assert!(!StateError::AlreadyExists.is_duplicate_key());
        assert!(!StateError::NotFound.is_duplicate_key());
    }

}
