//! Domain models for the rental roster.
//!
//! # Core Concepts
//!
//! - [`Person`]: a registered user of the rental service. Carries identity
//!   (a process-unique [`PersonId`]), the age/permission state that gates
//!   service access, and an append-only list of rental references.
//!
//! Rentals are deliberately *not* modeled here. A [`Person`] is generic over
//! the rental reference type and treats it as opaque: whatever the embedding
//! application uses to represent a rental can be appended as-is.

mod person;

pub use person::*;
