use crate::Database;
use crate::models::{OwnerRow, PropertyRow, RenterRow};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Owners --

    pub fn create_owner(&self, id: &str, phone: &str, password: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO owners (id, phone, password) VALUES (?1, ?2, ?3)",
                (id, phone, password),
            )?;
            Ok(())
        })
    }

    pub fn get_owner_by_phone(&self, phone: &str) -> Result<Option<OwnerRow>> {
        self.with_conn(|conn| query_owner_by_phone(conn, phone))
    }

    // -- Renters --

    pub fn create_renter(&self, id: &str, name: &str, phone: &str, password: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO renters (id, name, phone, password) VALUES (?1, ?2, ?3, ?4)",
                (id, name, phone, password),
            )?;
            Ok(())
        })
    }

    pub fn get_renter_by_phone(&self, phone: &str) -> Result<Option<RenterRow>> {
        self.with_conn(|conn| query_renter_by_phone(conn, phone))
    }

    // -- Properties --

    pub fn insert_property(&self, row: &PropertyRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO properties (
                    id, type, owner_name, mobile, location, price, rent,
                    description, floor, kitchen, bedroom, hall, garden,
                    water_supply, image_urls, map_link, date
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
                rusqlite::params![
                    row.id,
                    row.kind,
                    row.owner_name,
                    row.mobile,
                    row.location,
                    row.price,
                    row.rent,
                    row.description,
                    row.floor,
                    row.kitchen,
                    row.bedroom,
                    row.hall,
                    row.garden,
                    row.water_supply,
                    row.image_urls,
                    row.map_link,
                    row.date,
                ],
            )?;
            Ok(())
        })
    }

    /// All properties of the given type, newest first.
    pub fn list_properties_by_type(&self, kind: &str) -> Result<Vec<PropertyRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, type, owner_name, mobile, location, price, rent,
                        description, floor, kitchen, bedroom, hall, garden,
                        water_supply, image_urls, map_link, date
                 FROM properties
                 WHERE type = ?1
                 ORDER BY date DESC",
            )?;

            let rows = stmt
                .query_map([kind], map_property_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    /// Returns false when no row matched the id.
    pub fn delete_property(&self, id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM properties WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }
}

fn query_owner_by_phone(conn: &Connection, phone: &str) -> Result<Option<OwnerRow>> {
    let mut stmt =
        conn.prepare("SELECT id, phone, password, created_at FROM owners WHERE phone = ?1")?;

    let row = stmt
        .query_row([phone], |row| {
            Ok(OwnerRow {
                id: row.get(0)?,
                phone: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_renter_by_phone(conn: &Connection, phone: &str) -> Result<Option<RenterRow>> {
    let mut stmt =
        conn.prepare("SELECT id, name, phone, password, created_at FROM renters WHERE phone = ?1")?;

    let row = stmt
        .query_row([phone], |row| {
            Ok(RenterRow {
                id: row.get(0)?,
                name: row.get(1)?,
                phone: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn map_property_row(row: &rusqlite::Row<'_>) -> std::result::Result<PropertyRow, rusqlite::Error> {
    Ok(PropertyRow {
        id: row.get(0)?,
        kind: row.get(1)?,
        owner_name: row.get(2)?,
        mobile: row.get(3)?,
        location: row.get(4)?,
        price: row.get(5)?,
        rent: row.get(6)?,
        description: row.get(7)?,
        floor: row.get(8)?,
        kitchen: row.get(9)?,
        bedroom: row.get(10)?,
        hall: row.get(11)?,
        garden: row.get(12)?,
        water_supply: row.get(13)?,
        image_urls: row.get(14)?,
        map_link: row.get(15)?,
        date: row.get(16)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_test_db() -> Database {
        let path = std::env::temp_dir().join(format!("rently-db-test-{}.db", uuid::Uuid::new_v4()));
        Database::open(&path).unwrap()
    }

    fn sample_property(id: &str, kind: &str, date: &str) -> PropertyRow {
        PropertyRow {
            id: id.to_string(),
            kind: kind.to_string(),
            owner_name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            location: "Indiranagar".to_string(),
            price: Some(45_00_000.0),
            rent: Some(18_000.0),
            description: "2BHK near the metro".to_string(),
            floor: "2".to_string(),
            kitchen: "1".to_string(),
            bedroom: "2".to_string(),
            hall: "1".to_string(),
            garden: "no".to_string(),
            water_supply: "yes".to_string(),
            image_urls: r#"["https://media.example/a.jpg"]"#.to_string(),
            map_link: String::new(),
            date: date.to_string(),
        }
    }

    #[test]
    fn duplicate_phone_rejected_per_table() {
        let db = open_test_db();
        db.create_owner("o1", "555", "a").unwrap();
        assert!(db.create_owner("o2", "555", "b").is_err());

        db.create_renter("r1", "Ravi", "777", "pw").unwrap();
        assert!(db.create_renter("r2", "Rita", "777", "pw2").is_err());
    }

    #[test]
    fn owner_and_renter_phones_are_independent() {
        let db = open_test_db();
        db.create_owner("o1", "555", "a").unwrap();
        db.create_renter("r1", "Ravi", "555", "b").unwrap();

        let owner = db.get_owner_by_phone("555").unwrap().unwrap();
        let renter = db.get_renter_by_phone("555").unwrap().unwrap();
        assert_eq!(owner.password, "a");
        assert_eq!(renter.password, "b");
        assert_eq!(renter.name, "Ravi");
    }

    #[test]
    fn lookup_of_unknown_phone_is_none() {
        let db = open_test_db();
        assert!(db.get_owner_by_phone("000").unwrap().is_none());
        assert!(db.get_renter_by_phone("000").unwrap().is_none());
    }

    #[test]
    fn listing_filters_by_type_and_orders_newest_first() {
        let db = open_test_db();
        db.insert_property(&sample_property("p1", "house", "2024-05-01T10:00:00+00:00"))
            .unwrap();
        db.insert_property(&sample_property("p2", "flat", "2024-05-02T10:00:00+00:00"))
            .unwrap();
        db.insert_property(&sample_property("p3", "house", "2024-05-03T10:00:00+00:00"))
            .unwrap();
        db.insert_property(&sample_property("p4", "house", "2024-04-30T10:00:00+00:00"))
            .unwrap();

        let houses = db.list_properties_by_type("house").unwrap();
        let ids: Vec<&str> = houses.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p4"]);
        assert!(houses.iter().all(|p| p.kind == "house"));
    }

    #[test]
    fn listing_unknown_type_is_empty() {
        let db = open_test_db();
        assert!(db.list_properties_by_type("castle").unwrap().is_empty());
    }

    #[test]
    fn delete_removes_row_and_reports_missing() {
        let db = open_test_db();
        db.insert_property(&sample_property("p1", "house", "2024-05-01T10:00:00+00:00"))
            .unwrap();

        assert!(db.delete_property("p1").unwrap());
        assert!(db.list_properties_by_type("house").unwrap().is_empty());
        assert!(!db.delete_property("p1").unwrap());
    }
}
