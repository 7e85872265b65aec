/// Card service interface
pub mod card;
/// Class service interface
pub mod class;
/// Domain service interface
pub mod domain;
/// Lookup type service interface
pub mod lookup;
/// Session service interface
pub mod session;

