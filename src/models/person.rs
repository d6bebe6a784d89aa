use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum age for using the service without parental permission.
pub const ADULT_AGE: i32 = 18;

static NEXT_PERSON_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for a [`Person`].
///
/// Ids come from a process-wide monotonic sequence and are never reused:
/// every construction takes the next value, including on other threads.
/// Not `Deserialize` — an id can only be obtained by constructing a person,
/// which is what keeps the uniqueness guarantee honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    fn next() -> Self {
        // Relaxed is enough: only uniqueness matters, not ordering
        // relative to other memory operations.
        Self(NEXT_PERSON_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Input for registering a new person.
///
/// Only `age` is required. `age` is accepted as-is, with no bounds check —
/// the registry is permissive by contract and rejects nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePersonInput {
    pub age: i32,
    /// Defaults to `"unknown"` if not provided.
    pub name: Option<String>,
    /// Defaults to `false` if not provided.
    pub parent_permission: Option<bool>,
}

/// A registered user of the rental service.
///
/// A person is identity plus permission state: a unique id, an age, a name
/// (never empty — an omitted name resolves to `"unknown"`), and whether a
/// guardian has authorized service use regardless of age. Attached to each
/// person is the list of rentals they hold, generic over whatever type `R`
/// the embedding application uses for rental references.
///
/// All identity fields are fixed at construction. The only mutation a person
/// admits is [`add_rental`](Person::add_rental); the rental list grows and
/// never shrinks.
#[derive(Debug, Clone, Serialize)]
pub struct Person<R> {
    id: PersonId,
    age: i32,
    name: String,
    parent_permission: bool,
    rentals: Vec<R>,
    created_at: DateTime<Utc>,
}

impl<R> Person<R> {
    /// Registers a person, resolving defaults and assigning the next id.
    ///
    /// Cannot fail: no field is validated, negative and zero ages included.
    pub fn create(input: CreatePersonInput) -> Self {
        let id = PersonId::next();
        let name = input.name.unwrap_or_else(|| "unknown".to_string());
        let parent_permission = input.parent_permission.unwrap_or(false);

        debug!(%id, age = input.age, name = %name, "person registered");

        Self {
            id,
            age: input.age,
            name,
            parent_permission,
            rentals: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Registers a person with the default name (`"unknown"`) and no
    /// parental permission.
    pub fn new(age: i32) -> Self {
        Self::create(CreatePersonInput {
            age,
            ..Default::default()
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_permission(&self) -> bool {
        self.parent_permission
    }

    /// The rentals held by this person, in the order they were added.
    pub fn rentals(&self) -> &[R] {
        &self.rentals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether this person may use the service: of age ([`ADULT_AGE`] or
    /// older), or any age with parental permission.
    pub fn can_use_services(&self) -> bool {
        self.parent_permission || self.age >= ADULT_AGE
    }

    /// Returns the name as stored.
    ///
    /// No normalization is applied — callers get back exactly the string the
    /// person was registered with, however long or oddly cased.
    pub fn correct_name(&self) -> &str {
        &self.name
    }

    /// Appends a rental to this person and returns the full updated list.
    ///
    /// The rental is taken as-is; its shape is not inspected. This is the
    /// only mutation a person supports, and it cannot fail.
    pub fn add_rental(&mut self, rental: R) -> &[R] {
        self.rentals.push(rental);
        debug!(id = %self.id, total = self.rentals.len(), "rental recorded");
        &self.rentals
    }
}
