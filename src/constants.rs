

use crate::errors::StateError;



pub type StateResult<T> = std::result::Result<T, StateError>;

pub static CONVERSION_EXISTS: &str = "Conversion Exists";
pub static NOT_FOUND_CONVERSION: &str = "Not Found Conversion";

pub const CONVERSIONS_COLLECTION: &str = "conversions";

// conventional verification statuses; the state store persists whatever
// string a caller hands it, these are for callers that follow the lifecycle
pub const PENDING_STATUS: &str = "PENDING";
pub const APPROVED_STATUS: &str = "APPROVED";
pub const DECLINED_STATUS: &str = "DECLINED";

// server code the collection answers with when the unique `_id` index rejects a write
pub const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;
