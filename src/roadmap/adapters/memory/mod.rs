//! In-memory adapters for roadmap persistence.

mod todo;

pub use todo::InMemoryTodoRepository;
