use async_trait::async_trait;
use paxlist_core::repository::PassengerRepository;
use paxlist_core::{Affiliation, Infant, Passenger};
use sqlx::{Executor, Sqlite, SqlitePool};

pub struct SqlitePassengerRepository {
    pool: SqlitePool,
}

impl SqlitePassengerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PassengerRow {
    pax_id: String,
    flight_id: String,
    full_name: String,
    age: i64,
    pax_type: String,
    seat: Option<String>,
    special_needs: Option<String>,
}

impl TryFrom<PassengerRow> for Passenger {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: PassengerRow) -> Result<Self, Self::Error> {
        let age = u32::try_from(row.age)
            .map_err(|_| format!("Passenger {} has invalid age {}", row.pax_id, row.age))?;

        Ok(Passenger {
            pax_id: row.pax_id,
            flight_id: row.flight_id,
            full_name: row.full_name,
            age,
            pax_type: row.pax_type,
            seat: row.seat,
            special_needs: row.special_needs,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AffiliationRow {
    pax_id: String,
    affiliate_id: String,
}

#[derive(sqlx::FromRow)]
struct InfantRow {
    pax_id: String,
    requires_seat: bool,
}

#[async_trait]
impl PassengerRepository for SqlitePassengerRepository {
    async fn find_passengers_by_flight(
        &self,
        flight_id: &str,
    ) -> Result<Vec<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT pax_id, flight_id, full_name, age, type AS pax_type, seat, special_needs
            FROM passengers
            WHERE flight_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Passenger::try_from).collect()
    }

    async fn find_affiliations_by_passenger(
        &self,
        pax_id: &str,
    ) -> Result<Vec<Affiliation>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, AffiliationRow>(
            "SELECT pax_id, affiliate_id FROM passenger_affiliations WHERE pax_id = ? ORDER BY rowid",
        )
        .bind(pax_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Affiliation {
                pax_id: r.pax_id,
                affiliate_id: r.affiliate_id,
            })
            .collect())
    }

    async fn find_infant_by_passenger(
        &self,
        pax_id: &str,
    ) -> Result<Option<Infant>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, InfantRow>(
            "SELECT pax_id, requires_seat FROM infants WHERE pax_id = ? LIMIT 1",
        )
        .bind(pax_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Infant {
            pax_id: r.pax_id,
            requires_seat: r.requires_seat,
        }))
    }
}

// Administrative writes, used by seeding. Not part of the read path.
impl SqlitePassengerRepository {
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn insert_passenger(&self, pax: &Passenger) -> Result<(), sqlx::Error> {
        insert_passenger(&self.pool, pax).await
    }

    /// Inserts the directed edge only. Callers add the reverse row themselves.
    pub async fn insert_affiliation(&self, affiliation: &Affiliation) -> Result<(), sqlx::Error> {
        insert_affiliation(&self.pool, affiliation).await
    }

    pub async fn insert_infant(&self, infant: &Infant) -> Result<(), sqlx::Error> {
        insert_infant(&self.pool, infant).await
    }
}

// Executor-generic inserts so several writes can share one transaction.
pub async fn insert_passenger<'e, E>(executor: E, pax: &Passenger) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO passengers (pax_id, flight_id, full_name, age, type, seat, special_needs)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&pax.pax_id)
    .bind(&pax.flight_id)
    .bind(&pax.full_name)
    .bind(i64::from(pax.age))
    .bind(&pax.pax_type)
    .bind(&pax.seat)
    .bind(&pax.special_needs)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn insert_affiliation<'e, E>(executor: E, affiliation: &Affiliation) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO passenger_affiliations (pax_id, affiliate_id) VALUES (?, ?)")
        .bind(&affiliation.pax_id)
        .bind(&affiliation.affiliate_id)
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn insert_infant<'e, E>(executor: E, infant: &Infant) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO infants (pax_id, requires_seat) VALUES (?, ?)")
        .bind(&infant.pax_id)
        .bind(infant.requires_seat)
        .execute(executor)
        .await?;

    Ok(())
}
