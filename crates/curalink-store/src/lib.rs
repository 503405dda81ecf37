//! CuraLink persistence gateway.
//!
//! A thin insert / filtered-read contract over a document collection.
//! The store itself is an external collaborator; this crate defines the
//! interface the rest of the system programs against plus an in-memory
//! implementation used by the process and by tests.

pub mod error;
pub mod memory;
pub mod records;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use records::{
    Expert, Favorite, FavoriteItem, ForumQuestion, ForumReply, Patient, QuestionStatus,
    Researcher, Role, COLLECTION_FAVORITE, COLLECTION_FORUM_QUESTION, COLLECTION_FORUM_REPLY,
    COLLECTION_PATIENT, COLLECTION_RESEARCHER,
};
pub use store::{DocumentStore, Filter, Predicate};
