//! Diesel schema for board persistence.

diesel::table! {
    /// Board columns.
    board_columns (id) {
        /// Column identifier.
        id -> Uuid,
        /// Display name.
        name -> Text,
    }
}

diesel::table! {
    /// Board tasks.
    board_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name, collated by byte order.
        name -> Text,
        /// Task description.
        description -> Text,
        /// Task deadline.
        deadline -> Timestamptz,
        /// Favourite flag.
        is_favourite -> Bool,
        /// Owning column.
        column_id -> Uuid,
        /// Ordered image URLs as a JSONB array of strings.
        image_urls -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(board_columns, board_tasks);
