//! Diesel schema for catalogue persistence.

diesel::table! {
    /// Portfolio project records.
    projects (id) {
        id -> Int8,
        #[max_length = 100]
        title -> Varchar,
        #[max_length = 100]
        role -> Varchar,
        #[max_length = 200]
        tech -> Nullable<Varchar>,
        description -> Text,
        #[max_length = 200]
        image -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Certificate records.
    certificates (id) {
        id -> Int8,
        #[max_length = 200]
        title -> Varchar,
        #[max_length = 100]
        provider -> Varchar,
        #[max_length = 100]
        icon -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Skill records.
    skills (id) {
        id -> Int8,
        #[max_length = 50]
        category -> Varchar,
        #[max_length = 50]
        name -> Varchar,
        svg -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(projects, certificates, skills);
