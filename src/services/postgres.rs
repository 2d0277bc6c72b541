use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    PriceRange, ReliabilityBadge, ServiceType, StudentCandidate, TouristRequest, TripDates,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const STUDENT_COLUMNS: &str = r#"
    id, name, nationality, languages, interests, institute,
    trips_hosted, average_rating, no_show_count, reliability_badge,
    acceptance_rate, bio, cover_letter, price_min, price_max
"#;

/// Read-only PostgreSQL access to tourist requests and student guides
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
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
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

    /// Create a client whose pool connects on first use, without running migrations
    pub fn connect_lazy(database_url: &str) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Load a tourist request by id
    pub async fn get_tourist_request(&self, request_id: &str) -> Result<TouristRequest, PostgresError> {
        let query = r#"
            SELECT id, city, preferred_nationality, preferred_languages, service_type,
                   interests, start_date, end_date, preferred_time
            FROM tourist_requests
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(request_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("tourist request {}", request_id)))?;

        tourist_request_from_row(&row)
    }

    /// Approved students in a city, in a stable storage order
    ///
    /// The order feeds the matcher's tie-break, so it must not depend on
    /// the query plan.
    pub async fn get_eligible_students(&self, city: &str) -> Result<Vec<StudentCandidate>, PostgresError> {
        let query = format!(
            r#"
            SELECT {}
            FROM students
            WHERE LOWER(TRIM(city)) = LOWER(TRIM($1))
              AND status = 'approved'
            ORDER BY created_at ASC, id ASC
            "#,
            STUDENT_COLUMNS
        );

        let rows = sqlx::query(&query).bind(city).fetch_all(&self.pool).await?;

        let students: Vec<StudentCandidate> = rows.iter().map(student_from_row).collect::<Result<_, _>>()?;

        tracing::debug!("Loaded {} eligible students in {}", students.len(), city);

        Ok(students)
    }

    /// Load a single student by id, regardless of status
    pub async fn get_student(&self, student_id: &str) -> Result<StudentCandidate, PostgresError> {
        let query = format!("SELECT {} FROM students WHERE id = $1", STUDENT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("student {}", student_id)))?;

        student_from_row(&row)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn tourist_request_from_row(row: &PgRow) -> Result<TouristRequest, PostgresError> {
    let service_type: String = row.try_get("service_type")?;
    let service_type = ServiceType::parse(&service_type)
        .ok_or_else(|| PostgresError::InvalidData(format!("unknown service type '{}'", service_type)))?;

    Ok(TouristRequest {
        id: row.try_get("id")?,
        city: row.try_get("city")?,
        preferred_nationality: row.try_get("preferred_nationality")?,
        preferred_languages: row.try_get::<Option<Vec<String>>, _>("preferred_languages")?.unwrap_or_default(),
        service_type,
        interests: row.try_get::<Option<Vec<String>>, _>("interests")?.unwrap_or_default(),
        dates: TripDates {
            start: row.try_get::<Option<String>, _>("start_date")?.unwrap_or_default(),
            end: row.try_get::<Option<String>, _>("end_date")?.unwrap_or_default(),
        },
        preferred_time: row.try_get::<Option<String>, _>("preferred_time")?.unwrap_or_default(),
    })
}

fn student_from_row(row: &PgRow) -> Result<StudentCandidate, PostgresError> {
    let badge: Option<String> = row.try_get("reliability_badge")?;
    let price_min: Option<f64> = row.try_get("price_min")?;
    let price_max: Option<f64> = row.try_get("price_max")?;

    Ok(StudentCandidate {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        nationality: row.try_get("nationality")?,
        languages: row.try_get::<Option<Vec<String>>, _>("languages")?.unwrap_or_default(),
        interests: row.try_get::<Option<Vec<String>>, _>("interests")?.unwrap_or_default(),
        institute: row.try_get("institute")?,
        trips_hosted: non_negative(row.try_get::<Option<i32>, _>("trips_hosted")?),
        average_rating: row.try_get("average_rating")?,
        no_show_count: non_negative(row.try_get::<Option<i32>, _>("no_show_count")?),
        // An unrecognised badge is treated as no badge
        reliability_badge: badge.as_deref().and_then(ReliabilityBadge::parse),
        acceptance_rate: row.try_get("acceptance_rate")?,
        bio: row.try_get("bio")?,
        cover_letter: row.try_get("cover_letter")?,
        price_range: match (price_min, price_max) {
            (Some(min), Some(max)) => Some(PriceRange { min, max }),
            _ => None,
        },
    })
}

#[inline]
fn non_negative(value: Option<i32>) -> u32 {
    value.map(|v| v.max(0) as u32).unwrap_or(0)
}
