use crate::core::tickets::sql_pattern;
use crate::models::{AnimalListing, AdopterCandidate, Registration, TicketCategory};
use crate::services::store::{ListingStore, RegistrationStore, StoreError};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

const ANIMAL_QUERY: &str = r#"
    SELECT id,
           COALESCE(nome, '') AS nome,
           COALESCE(especie, '') AS especie,
           COALESCE(porte, '') AS porte,
           COALESCE(caracteristicas, '') AS caracteristicas
    FROM adocao
    WHERE id = $1
"#;

const CANDIDATES_PAGE_QUERY: &str = r#"
    SELECT id,
           COALESCE(nome, '') AS nome,
           COALESCE(especie, '') AS especie,
           COALESCE(porte, '') AS porte,
           COALESCE(caracteristicas, '') AS caracteristicas
    FROM interessados_adocao
    WHERE id > $1
    ORDER BY id ASC
    LIMIT $2
"#;

const LATEST_TICKET_QUERY: &str = r#"
    SELECT ticket FROM (
        SELECT ticket FROM castracao WHERE ticket ~ $1
        UNION ALL
        SELECT ticket FROM mutirao_inscricao WHERE ticket ~ $1
    ) AS tickets
    ORDER BY ticket DESC
    LIMIT 1
"#;

const INSERT_REGISTRATION_QUERY: &str = r#"
    INSERT INTO castracao
        (ticket, tipo, nome, contato, nome_pet, especie, origem)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id
"#;

/// PostgreSQL client over the NGO web application's schema
///
/// The web application creates and migrates the tables. This client reads
/// listings from `adocao` and interested adopters from `interessados_adocao`
/// (both keyed by `SERIAL` ids), and writes one `castracao` row per signed-up
/// animal. `castracao.ticket` is `UNIQUE`; group-event sign-ups kept in
/// `mutirao_inscricao.ticket` share the same ticket space.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn animal_from_row(row: &PgRow) -> Result<AnimalListing, sqlx::Error> {
    Ok(AnimalListing {
        id: row.try_get("id")?,
        name: row.try_get("nome")?,
        species: row.try_get("especie")?,
        size: row.try_get("porte")?,
        characteristics: row.try_get("caracteristicas")?,
    })
}

fn candidate_from_row(row: &PgRow) -> Result<AdopterCandidate, sqlx::Error> {
    Ok(AdopterCandidate {
        id: row.try_get("id")?,
        name: row.try_get("nome")?,
        species: row.try_get("especie")?,
        size: row.try_get("porte")?,
        characteristics: row.try_get("caracteristicas")?,
    })
}

impl ListingStore for PostgresClient {
    async fn fetch_animal(&self, animal_id: i32) -> Result<AnimalListing, StoreError> {
        let row = sqlx::query(ANIMAL_QUERY)
            .bind(animal_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("animal {}", animal_id)))?;

        Ok(animal_from_row(&row)?)
    }

    /// Keyset page over `interessados_adocao`
    ///
    /// Ids are `SERIAL`, so id order is insertion order.
    async fn fetch_candidates_after(
        &self,
        after_id: i32,
        page_size: usize,
    ) -> Result<Vec<AdopterCandidate>, StoreError> {
        let rows = sqlx::query(CANDIDATES_PAGE_QUERY)
            .bind(after_id)
            .bind(i64::try_from(page_size).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        let candidates = rows
            .iter()
            .map(candidate_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} adopter candidates after id {}", candidates.len(), after_id);

        Ok(candidates)
    }
}

impl RegistrationStore for PostgresClient {
    /// Highest stored ticket of the category across both ticketed tables
    ///
    /// The anchored pattern keeps exactly four digits, so lexical order
    /// equals numeric order and `ORDER BY ... DESC LIMIT 1` finds the max.
    async fn latest_tickets(&self, category: TicketCategory) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(LATEST_TICKET_QUERY)
            .bind(sql_pattern(category))
            .fetch_all(&self.pool)
            .await?;

        let tickets = rows
            .iter()
            .map(|row| row.try_get("ticket"))
            .collect::<Result<Vec<String>, _>>()?;

        Ok(tickets)
    }

    async fn insert_registrations(&self, registrations: &[Registration]) -> Result<Vec<i32>, StoreError> {
        // Rolled back on drop if any insert fails
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(registrations.len());

        for registration in registrations {
            let row = sqlx::query(INSERT_REGISTRATION_QUERY)
                .bind(&registration.ticket)
                .bind(registration.category.as_str())
                .bind(&registration.tutor_name)
                .bind(&registration.tutor_phone)
                .bind(&registration.pet_name)
                .bind(&registration.species)
                .bind(registration.created_at.naive_utc())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    if let sqlx::Error::Database(db_err) = &e {
                        if db_err.is_unique_violation() {
                            return StoreError::DuplicateTicket(registration.ticket.clone());
                        }
                    }
                    StoreError::from(e)
                })?;

            ids.push(row.try_get("id")?);
        }

        tx.commit().await?;

        tracing::debug!("Inserted {} registrations", registrations.len());

        Ok(ids)
    }
}
