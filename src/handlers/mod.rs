// HTTP handlers, grouped by access tier.
//
// public/    - no authentication (registration, login)
// protected/ - requires a valid bearer token
pub mod protected;
pub mod public;
