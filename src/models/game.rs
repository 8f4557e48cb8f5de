use diesel::prelude::*;
use uuid::Uuid;

/// Game row as stored in the `games` table.
///
/// The same struct is used for reads, inserts and full-row updates since
/// every column is written on each mutation.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset, Identifiable)]
#[diesel(table_name = crate::schema::games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub producer: String,
    pub price: f64,
}

impl Game {
    /// Builds a new game with a freshly generated identity.
    pub fn new(name: String, producer: String, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            producer,
            price,
        }
    }
}
