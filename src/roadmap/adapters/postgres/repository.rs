//! `PostgreSQL` repository implementation for roadmap storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::roadmap::{
    domain::{NewTodo, PersistedTodoData, Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult, TodoTransaction},
};
use crate::storage::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// `PostgreSQL`-backed roadmap repository.
///
/// Units of work run as `SERIALIZABLE` transactions, so two concurrent
/// activations cannot both pass their demotion scan and commit.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<DieselError> for TodoRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

struct PgTodoTransaction<'conn> {
    connection: &'conn mut PgConnection,
}

impl TodoTransaction for PgTodoTransaction<'_> {
    fn find_by_id(&mut self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let row = todos::table
            .find(id.value())
            .select(TodoRow::as_select())
            .first::<TodoRow>(self.connection)
            .optional()?;
        row.map(row_to_todo).transpose()
    }

    fn insert(&mut self, todo: NewTodo) -> TodoRepositoryResult<Todo> {
        let new_row = NewTodoRow {
            description: todo.description().as_str().to_owned(),
            category: todo.category().to_owned(),
            status: todo.status().as_str().to_owned(),
            created_at: todo.created_at(),
        };
        let row = diesel::insert_into(todos::table)
            .values(&new_row)
            .returning(TodoRow::as_returning())
            .get_result::<TodoRow>(self.connection)?;
        row_to_todo(row)
    }

    fn update(&mut self, todo: &Todo) -> TodoRepositoryResult<()> {
        let changes = TodoChangeset {
            description: todo.description().to_owned(),
            category: todo.category().to_owned(),
            status: todo.status().as_str().to_owned(),
            completed_at: todo.completed_at(),
        };
        let affected = diesel::update(todos::table.find(todo.id().value()))
            .set(&changes)
            .execute(self.connection)?;
        if affected == 0 {
            return Err(TodoRepositoryError::NotFound(todo.id()));
        }
        Ok(())
    }

    fn delete(&mut self, id: TodoId) -> TodoRepositoryResult<()> {
        let affected = diesel::delete(todos::table.find(id.value())).execute(self.connection)?;
        if affected == 0 {
            return Err(TodoRepositoryError::NotFound(id));
        }
        Ok(())
    }

    fn list_by_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>> {
        let rows = todos::table
            .filter(todos::status.eq(status.as_str()))
            .order(todos::id.asc())
            .select(TodoRow::as_select())
            .load::<TodoRow>(self.connection)?;
        rows.into_iter().map(row_to_todo).collect()
    }

    fn oldest_with_status(&mut self, status: TodoStatus) -> TodoRepositoryResult<Option<Todo>> {
        let row = todos::table
            .filter(todos::status.eq(status.as_str()))
            .order(todos::id.asc())
            .select(TodoRow::as_select())
            .first::<TodoRow>(self.connection)
            .optional()?;
        row.map(row_to_todo).transpose()
    }

    fn recently_completed(&mut self, limit: usize) -> TodoRepositoryResult<Vec<Todo>> {
        let limit = i64::try_from(limit).map_err(TodoRepositoryError::persistence)?;
        let rows = todos::table
            .filter(todos::status.eq(TodoStatus::Done.as_str()))
            .order((todos::completed_at.desc().nulls_last(), todos::id.desc()))
            .limit(limit)
            .select(TodoRow::as_select())
            .load::<TodoRow>(self.connection)?;
        rows.into_iter().map(row_to_todo).collect()
    }

    fn delete_all(&mut self) -> TodoRepositoryResult<usize> {
        Ok(diesel::delete(todos::table).execute(self.connection)?)
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn transaction<T, F>(&self, work: F) -> TodoRepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn TodoTransaction) -> TodoRepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            connection
                .build_transaction()
                .serializable()
                .run(|connection| work(&mut PgTodoTransaction { connection }))
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        description,
        category,
        status: persisted_status,
        created_at,
        completed_at,
    } = row;

    let status = TodoStatus::try_from(persisted_status.as_str())
        .map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        description,
        category,
        status,
        created_at,
        completed_at,
    }))
}
