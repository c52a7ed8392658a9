//! In-memory roadmap repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::roadmap::{
    domain::{NewTodo, Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoTransaction},
};

/// Thread-safe in-memory roadmap repository.
///
/// A unit of work holds the write lock for its whole duration and operates
/// on a copy of the committed state, which replaces the committed state
/// only when the work succeeds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoTransaction for InMemoryTodoState {
    fn find_by_id(&mut self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        Ok(self.todos.get(&id).cloned())
    }

    fn insert(&mut self, todo: NewTodo) -> TodoRepositoryResult<Todo> {
        self.last_id += 1;
        let stored = todo.into_todo(TodoId::new(self.last_id));
        self.todos.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    fn update(&mut self, todo: &Todo) -> TodoRepositoryResult<()> {
        let slot = self
            .todos
            .get_mut(&todo.id())
            .ok_or(TodoRepositoryError::NotFound(todo.id()))?;
        *slot = todo.clone();
        Ok(())
    }

    fn delete(&mut self, id: TodoId) -> TodoRepositoryResult<()> {
        self.todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    fn list_by_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>> {
        Ok(self
            .todos
            .values()
            .filter(|todo| todo.status() == status)
            .cloned()
            .collect())
    }

    fn oldest_with_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Option<Todo>> {
        Ok(self
            .todos
            .values()
            .find(|todo| todo.status() == status)
            .cloned())
    }

    fn recently_completed(&mut self, limit: usize) -> TodoRepositoryResult<Vec<Todo>> {
        let mut done = self.list_by_status(TodoStatus::Done)?;
        done.sort_by(|a, b| (b.completed_at(), b.id()).cmp(&(a.completed_at(), a.id())));
        done.truncate(limit);
        Ok(done)
    }

    fn delete_all(&mut self) -> TodoRepositoryResult<usize> {
        let removed = self.todos.len();
        self.todos.clear();
        Ok(removed)
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn transaction<T, F>(&self, work: F) -> TodoRepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TodoTransaction) -> TodoRepositoryResult<T> + Send + 'static,
    {
        let mut committed = self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut working = committed.clone();
        let output = work(&mut working)?;
        *committed = working;
        Ok(output)
    }
}
