use super::prelude::*;

pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_user: &NewUser) -> Result<User, sqlx_core::Error> {
        query_as!(
            User,
            r#"
            INSERT INTO "user" (name)
            VALUES ($1)
            RETURNING id, name
            "#,
            new_user.name.as_str()
        )
        .fetch_one(self.pool)
        .await
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx_core::Error> {
        query_as!(
            User,
            r#"
            SELECT id, name
            FROM "user"
            "#
        )
        .fetch_all(self.pool)
        .await
    }
}
