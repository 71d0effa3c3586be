//! Repository for the `themes` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::theme::{NewTheme, Theme, ThemeChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, slug, description, is_active, is_default, is_system, \
    color_scheme, typography, spacing, borders, version, tags, preview, \
    created_by, created_at, updated_at";

/// Provides CRUD operations for themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// List themes ordered by name, optionally only those not soft-disabled.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes \
             WHERE ($1 = FALSE OR is_active) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Find a theme by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a theme by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE slug = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// The theme currently flagged as default, if any.
    pub async fn find_default(pool: &PgPool) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE is_default ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Theme>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new theme, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTheme) -> Result<Theme, sqlx::Error> {
        let query = format!(
            "INSERT INTO themes \
                 (name, slug, description, is_active, is_default, is_system, \
                  color_scheme, typography, spacing, borders, version, tags, preview, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(input.is_default)
            .bind(input.is_system)
            .bind(&input.color_scheme)
            .bind(&input.typography)
            .bind(&input.spacing)
            .bind(&input.borders)
            .bind(&input.version)
            .bind(&input.tags)
            .bind(&input.preview)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Partially update a theme.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ThemeChanges,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!(
            "UPDATE themes SET \
                 name = COALESCE($2, name), \
                 slug = COALESCE($3, slug), \
                 description = COALESCE($4, description), \
                 is_active = COALESCE($5, is_active), \
                 is_default = COALESCE($6, is_default), \
                 color_scheme = COALESCE($7, color_scheme), \
                 typography = COALESCE($8, typography), \
                 spacing = COALESCE($9, spacing), \
                 borders = COALESCE($10, borders), \
                 version = COALESCE($11, version), \
                 tags = COALESCE($12, tags), \
                 preview = COALESCE($13, preview), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.slug)
            .bind(&changes.description)
            .bind(changes.is_active)
            .bind(changes.is_default)
            .bind(&changes.color_scheme)
            .bind(&changes.typography)
            .bind(&changes.spacing)
            .bind(&changes.borders)
            .bind(&changes.version)
            .bind(&changes.tags)
            .bind(&changes.preview)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a theme's document columns, clearing the ones `input`
    /// leaves empty. Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewTheme,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!(
            "UPDATE themes SET \
                 name = $2, slug = $3, description = $4, is_active = $5, \
                 color_scheme = $6, typography = $7, spacing = $8, borders = $9, \
                 version = $10, tags = $11, preview = $12, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(&input.color_scheme)
            .bind(&input.typography)
            .bind(&input.spacing)
            .bind(&input.borders)
            .bind(&input.version)
            .bind(&input.tags)
            .bind(&input.preview)
            .fetch_optional(pool)
            .await
    }

    /// Delete a theme by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM themes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Make `id` the only default theme.
    ///
    /// Clears the previous holder and sets the new one in a single
    /// transaction, so no reader ever observes two defaults. Returns `None`
    /// (and changes nothing) if the theme does not exist.
    pub async fn set_default_exclusive(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE themes SET is_default = FALSE, updated_at = NOW() \
             WHERE is_default AND id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE themes SET is_default = TRUE, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if row.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(row)
    }
}
