//! Person registry for a rental tracking service.
//!
//! The crate models the people side of a rental service: who they are,
//! whether they may use the service, and which rentals they hold. Rentals
//! themselves are opaque to this crate — a [`Person`] is generic over the
//! rental reference type, and callers hand in whatever their rental objects
//! are.
//!
//! ```
//! use rental_roster::{CreatePersonInput, Person};
//!
//! let mut person: Person<&str> = Person::create(CreatePersonInput {
//!     age: 25,
//!     name: Some("John".to_string()),
//!     parent_permission: Some(false),
//! });
//!
//! assert!(person.can_use_services());
//! person.add_rental("The Dispossessed");
//! assert_eq!(person.rentals().len(), 1);
//! ```

pub mod models;

pub use models::{CreatePersonInput, Person, PersonId, ADULT_AGE};
