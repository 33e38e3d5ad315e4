use super::IFriendRepo;
use bursdag_domain::{Friend, ID};
use chrono::NaiveDate;
use chrono_tz::Tz;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresFriendRepo {
    pool: PgPool,
}

impl PostgresFriendRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FriendRaw {
    friend_uid: Uuid,
    user_uid: Uuid,
    name: String,
    email: Option<String>,
    birthday: NaiveDate,
    timezone: String,
    reminder_days_override: Option<i64>,
    notes: Option<String>,
}

impl Into<Friend> for FriendRaw {
    fn into(self) -> Friend {
        Friend {
            id: self.friend_uid.into(),
            user_id: self.user_uid.into(),
            name: self.name,
            email: self.email,
            birthday: self.birthday,
            // Timezones are validated on the way in, a stored value that
            // no longer parses falls back to UTC
            timezone: self.timezone.parse().unwrap_or(Tz::UTC),
            reminder_days_override: self.reminder_days_override,
            notes: self.notes,
        }
    }
}

#[async_trait::async_trait]
impl IFriendRepo for PostgresFriendRepo {
    async fn insert(&self, friend: &Friend) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO friends
            (friend_uid, user_uid, name, email, birthday, timezone, reminder_days_override, notes)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(friend.id.inner_ref())
        .bind(friend.user_id.inner_ref())
        .bind(&friend.name)
        .bind(&friend.email)
        .bind(friend.birthday)
        .bind(friend.timezone.name())
        .bind(friend.reminder_days_override)
        .bind(&friend.notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, friend: &Friend) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE friends
            SET name = $2,
            email = $3,
            birthday = $4,
            timezone = $5,
            reminder_days_override = $6,
            notes = $7
            WHERE friend_uid = $1
            "#,
        )
        .bind(friend.id.inner_ref())
        .bind(&friend.name)
        .bind(&friend.email)
        .bind(friend.birthday)
        .bind(friend.timezone.name())
        .bind(friend.reminder_days_override)
        .bind(&friend.notes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, friend_id: &ID) -> Option<Friend> {
        match sqlx::query_as::<_, FriendRaw>(
            r#"
            DELETE FROM friends AS f
            WHERE f.friend_uid = $1
            RETURNING *
            "#,
        )
        .bind(friend_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(friend) => Some(friend.into()),
            Err(_) => None,
        }
    }

    async fn find(&self, friend_id: &ID) -> Option<Friend> {
        match sqlx::query_as::<_, FriendRaw>(
            r#"
            SELECT * FROM friends AS f
            WHERE f.friend_uid = $1
            "#,
        )
        .bind(friend_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(friend) => Some(friend.into()),
            Err(_) => None,
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Friend>> {
        let friends = sqlx::query_as::<_, FriendRaw>(
            r#"
            SELECT * FROM friends AS f
            WHERE f.user_uid = $1
            ORDER BY f.birthday ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(friends.into_iter().map(|f| f.into()).collect())
    }
}
