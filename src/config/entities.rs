//! Entity registry: the fixed set of tables exposed over HTTP.

/// One table exposed through a list route and a by-id route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityConfig {
    /// Table name, also used in "not found" messages (e.g. "Books").
    pub name: &'static str,
    /// Integer primary identifier column (e.g. "BookID").
    pub id_column: &'static str,
}

impl EntityConfig {
    pub const fn new(name: &'static str, id_column: &'static str) -> Self {
        EntityConfig { name, id_column }
    }

    /// URL segment for this entity: the table name lowercased.
    pub fn path_segment(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn collection_path(&self) -> String {
        format!("/{}", self.path_segment())
    }

    pub fn item_path(&self) -> String {
        format!("/{}/:id", self.path_segment())
    }
}

/// Tables of the library database, in the order their routes are advertised.
pub const ENTITIES: &[EntityConfig] = &[
    EntityConfig::new("Genres", "GenreID"),
    EntityConfig::new("Authors", "AuthorID"),
    EntityConfig::new("Publishers", "PublisherID"),
    EntityConfig::new("Categories", "CategoryID"),
    EntityConfig::new("Books", "BookID"),
    EntityConfig::new("Members", "MemberID"),
    EntityConfig::new("Loans", "LoanID"),
    EntityConfig::new("Fines", "FineID"),
    EntityConfig::new("Reservations", "ReservationID"),
    EntityConfig::new("LibraryStaff", "StaffID"),
];
