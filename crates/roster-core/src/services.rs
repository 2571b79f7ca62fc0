use async_trait::async_trait;

use crate::{NewUser, User};

/// Data-store client used by a bootstrap run.
///
/// `disconnect` releases whatever the client holds. Callers go through
/// [`run_scoped`], which invokes it exactly once.
#[async_trait]
pub trait UserStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn create_user(&self, new_user: &NewUser) -> Result<User, Self::Error>;
    async fn find_many_users(&self) -> Result<Vec<User>, Self::Error>;
    async fn disconnect(&self);
}

/// Sink for the records produced by a run.
pub trait Reporter {
    fn created(&mut self, user: &User);
    fn listed(&mut self, users: &[User]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub created: User,
    pub users: Vec<User>,
}

/// Inserts `new_user`, then reads every user back.
///
/// The created record is reported before the read so it stays visible when
/// the read fails.
pub async fn seed_and_list<S, R>(
    store: &S,
    new_user: &NewUser,
    reporter: &mut R,
) -> Result<SeedReport, S::Error>
where
    S: UserStore + ?Sized,
    R: Reporter + Send,
{
    let created = store.create_user(new_user).await?;
    tracing::info!(event = "user_created", user_id = created.id, name = %created.name);
    reporter.created(&created);

    let users = store.find_many_users().await?;
    tracing::info!(event = "users_listed", count = users.len());
    reporter.listed(&users);

    Ok(SeedReport { created, users })
}

/// Runs [`seed_and_list`] and releases the store once, whatever the outcome.
pub async fn run_scoped<S, R>(
    store: S,
    new_user: &NewUser,
    reporter: &mut R,
) -> Result<SeedReport, S::Error>
where
    S: UserStore,
    R: Reporter + Send,
{
    let outcome = seed_and_list(&store, new_user, reporter).await;
    if let Err(err) = &outcome {
        tracing::debug!(event = "bootstrap_sequence_failed", error = %err);
    }
    store.disconnect().await;
    outcome
}

/// Test double that keeps every reported record in memory.
#[cfg(feature = "test-util")]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingReporter {
    pub created: Vec<User>,
    pub listed: Vec<Vec<User>>,
}

#[cfg(feature = "test-util")]
impl Reporter for RecordingReporter {
    fn created(&mut self, user: &User) {
        self.created.push(user.clone());
    }

    fn listed(&mut self, users: &[User]) {
        self.listed.push(users.to_vec());
    }
}
