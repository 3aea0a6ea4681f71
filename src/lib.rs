


pub mod constants;
pub mod contexts;
pub mod errors;
pub mod schemas;
pub mod state;

pub use errors::StateError;
pub use schemas::conversion::Conversion;
pub use state::State;
