//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; `diesel print-schema` against a migrated
//! database regenerates it.

diesel::table! {
    /// ISO 3166-1 reference data, seeded by the initial migration.
    countries (country_code) {
        /// Two-letter upper-case code.
        country_code -> Bpchar,
        /// Display name.
        country_name -> Varchar,
    }
}

diesel::table! {
    /// Registry users.
    users (id) {
        /// Serial primary key.
        id -> Int4,
        /// Unique display name (max 32 characters).
        name -> Varchar,
        /// Colour tag, `teal` unless set.
        color -> Varchar,
    }
}

diesel::table! {
    /// User ↔ country visits; cascades with either parent.
    country_visited (user_id, country_code) {
        user_id -> Int4,
        country_code -> Bpchar,
    }
}

diesel::joinable!(country_visited -> countries (country_code));
diesel::joinable!(country_visited -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(countries, country_visited, users);
