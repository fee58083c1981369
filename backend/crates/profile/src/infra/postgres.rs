//! PostgreSQL Repository Implementation
//!
//! One row per profile. Social links and the experience and education
//! lists are JSONB columns, so a profile is always written as a whole.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::owner::OwnedResourceStore;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{
    education::Education,
    experience::Experience,
    profile::{Profile, Social},
};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{ProfileId, UserId, skills::Skills};
use crate::error::ProfileResult;

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_PROFILE: &str = r#"
    SELECT
        profile_id,
        user_id,
        status,
        skills,
        company,
        website,
        location,
        bio,
        github_username,
        social,
        experience,
        education,
        created_at
    FROM profiles
"#;

impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILE} WHERE user_id = $1"))
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn list(&self) -> ProfileResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILE} ORDER BY created_at"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProfileRow::into_profile).collect())
    }

    async fn save(&self, profile: &Profile) -> ProfileResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                profile_id,
                user_id,
                status,
                skills,
                company,
                website,
                location,
                bio,
                github_username,
                social,
                experience,
                education,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                social = EXCLUDED.social,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education,
                updated_at = NOW()
            "#,
        )
        .bind(profile.profile_id.as_uuid())
        .bind(profile.user_id.as_uuid())
        .bind(&profile.status)
        .bind(profile.skills.as_slice())
        .bind(profile.company.as_deref())
        .bind(profile.website.as_deref())
        .bind(profile.location.as_deref())
        .bind(profile.bio.as_deref())
        .bind(profile.github_username.as_deref())
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> ProfileResult<u64> {
        let deleted = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedResourceStore for PgProfileRepository {
    fn resource_name(&self) -> &'static str {
        "profile"
    }

    async fn delete_all_by_owner(&self, owner: &UserId) -> AppResult<u64> {
        self.delete_by_user(owner).await.map_err(|e| e.to_app_error())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    user_id: Uuid,
    status: String,
    skills: Vec<String>,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    github_username: Option<String>,
    social: Json<Social>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            status: self.status,
            skills: Skills::from_db(self.skills),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            github_username: self.github_username,
            social: self.social.0,
            experience: self.experience.0,
            education: self.education.0,
            created_at: self.created_at,
        }
    }
}
