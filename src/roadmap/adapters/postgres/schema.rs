//! Diesel schema for roadmap persistence.

diesel::table! {
    /// Roadmap task records.
    todos (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Free-text task description.
        description -> Text,
        /// Free-text category label.
        #[max_length = 100]
        category -> Varchar,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp, set once.
        completed_at -> Nullable<Timestamptz>,
    }
}
