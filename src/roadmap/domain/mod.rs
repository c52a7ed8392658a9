//! Domain model for the task roadmap.
//!
//! Tasks carry their lifecycle status and timestamps. Cross-task rules such
//! as the single-active-task invariant live in the roadmap service, which
//! works against the repository port rather than cached state.

mod error;
mod ids;
mod status;
mod todo;

pub use error::{ParseTodoStatusError, TodoDomainError};
pub use ids::TodoId;
pub use status::TodoStatus;
pub use todo::{DEFAULT_CATEGORY, NewTodo, PersistedTodoData, Todo, TodoDescription, TodoEdit};
