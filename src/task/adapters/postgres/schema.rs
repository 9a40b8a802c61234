//! Diesel schema for task persistence.

diesel::table! {
    /// Task records backing the board.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional free-form description.
        #[max_length = 300]
        description -> Nullable<Varchar>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Completion flag.
        completed -> Bool,
    }
}
