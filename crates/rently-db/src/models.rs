/// Database row types — these map directly to SQLite rows.
/// Distinct from the rently-types API models to keep the DB layer independent;
/// timestamps and the image-URL JSON stay raw strings here.

pub struct OwnerRow {
    pub id: String,
    pub phone: String,
    pub password: String,
    pub created_at: String,
}

pub struct RenterRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub created_at: String,
}

#[derive(Clone)]
pub struct PropertyRow {
    pub id: String,
    pub kind: String,
    pub owner_name: String,
    pub mobile: String,
    pub location: String,
    pub price: Option<f64>,
    pub rent: Option<f64>,
    pub description: String,
    pub floor: String,
    pub kitchen: String,
    pub bedroom: String,
    pub hall: String,
    pub garden: String,
    pub water_supply: String,
    /// JSON array of durable URLs, in upload order.
    pub image_urls: String,
    pub map_link: String,
    pub date: String,
}
