//! The in-memory todo collection.
//!
//! # Design
//! Records live in a `Vec` in creation order; `next_id` starts at 1 and
//! only ever increments, so ids are strictly increasing and never reused,
//! even after a delete. Lookup is a linear scan by id, which is fine at
//! this scale; an id-to-index map would be a drop-in optimization with no
//! change to the public contract.
//!
//! The store is not safe for concurrent mutation. The host must serialize
//! access, e.g. behind a lock as the server crate does.

use chrono::Utc;

use crate::error::StoreError;
use crate::types::{TodoInput, TodoRecord};

/// In-memory, ordered collection of todo records.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<TodoRecord>,
    next_id: u64,
}

impl TodoStore {
    /// Creates an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All records in creation order.
    pub fn list(&self) -> &[TodoRecord] {
        &self.todos
    }

    /// The record with the given id.
    pub fn get(&self, id: u64) -> Result<&TodoRecord, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Appends a new record, assigning the next id and stamping the
    /// creation time.
    pub fn create(&mut self, input: TodoInput) -> TodoRecord {
        let record = TodoRecord {
            id: self.next_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.todos.push(record.clone());
        record
    }

    /// Replaces `title`, `description`, and `completed` of the record with
    /// the given id, in place. `id`, `created_at`, and the record's position
    /// in the sequence are unchanged.
    pub fn update(&mut self, id: u64, input: TodoInput) -> Result<&TodoRecord, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        todo.title = input.title;
        todo.description = input.description;
        todo.completed = input.completed;
        Ok(todo)
    }

    /// Removes the record with the given id and returns it. The id is
    /// never reassigned to a later record.
    pub fn delete(&mut self, id: u64) -> Result<TodoRecord, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        Ok(self.todos.remove(index))
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: None,
            completed: false,
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = TodoStore::new();
        assert_eq!(store.create(input("a")).id, 1);
        assert_eq!(store.create(input("b")).id, 2);
        assert_eq!(store.create(input("c")).id, 3);
    }

    #[test]
    fn create_captures_fields() {
        let mut store = TodoStore::new();
        let record = store.create(TodoInput {
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            completed: true,
        });
        assert_eq!(record.title, "Buy milk");
        assert_eq!(record.description.as_deref(), Some("2 liters"));
        assert!(record.completed);
    }

    #[test]
    fn get_returns_created_record() {
        let mut store = TodoStore::new();
        let created = store.create(input("a"));
        assert_eq!(store.get(1).unwrap(), &created);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = TodoStore::new();
        assert_eq!(store.get(99), Err(StoreError::NotFound { id: 99 }));
    }

    #[test]
    fn list_preserves_creation_order() {
        let mut store = TodoStore::new();
        store.create(input("first"));
        store.create(input("second"));
        store.create(input("third"));
        let titles: Vec<&str> = store.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = TodoStore::new();
        let created_at = store.create(input("a")).created_at;
        store.create(input("b"));

        let updated = store
            .update(
                1,
                TodoInput {
                    title: "a2".to_string(),
                    description: Some("note".to_string()),
                    completed: true,
                },
            )
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "a2");
        assert_eq!(updated.description.as_deref(), Some("note"));
        assert!(updated.completed);
        assert_eq!(updated.created_at, created_at);

        // position in the sequence is unchanged
        assert_eq!(store.list()[0].id, 1);
        assert_eq!(store.list()[1].id, 2);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(
            store.update(5, input("x")),
            Err(StoreError::NotFound { id: 5 })
        );
    }

    #[test]
    fn delete_returns_removed_record() {
        let mut store = TodoStore::new();
        store.create(input("a"));
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(removed.title, "a");
        assert_eq!(store.get(1), Err(StoreError::NotFound { id: 1 }));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(store.delete(1), Err(StoreError::NotFound { id: 1 }));
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut store = TodoStore::new();
        store.create(input("Buy milk")); // id 1
        store.create(input("Walk dog")); // id 2
        store.delete(1).unwrap();
        let record = store.create(input("Read"));
        assert_eq!(record.id, 3);

        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn store_stays_usable_after_errors() {
        let mut store = TodoStore::new();
        assert!(store.get(1).is_err());
        assert!(store.delete(1).is_err());
        assert!(store.update(1, input("x")).is_err());
        assert_eq!(store.create(input("a")).id, 1);
    }
}
