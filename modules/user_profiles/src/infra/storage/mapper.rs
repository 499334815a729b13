use anyhow::Context;
use sea_orm::Set;

use crate::contract::model::{ProfileKey, ProfileRecord};
use crate::infra::storage::entity::{ActiveModel as ProfileAM, Model as ProfileEntity};

/// Column value for a profile key. Keys have at most 10 digits, so they always fit.
pub fn key_to_column(key: ProfileKey) -> i64 {
    key.get() as i64
}

/// Convert a database row to a contract model
pub fn entity_to_contract(entity: ProfileEntity) -> anyhow::Result<ProfileRecord> {
    let id = u64::try_from(entity.id)
        .with_context(|| format!("negative profile id {}", entity.id))?;
    let total_jobs_completed = u32::try_from(entity.total_jobs_completed).with_context(|| {
        format!(
            "total_jobs_completed out of range: {}",
            entity.total_jobs_completed
        )
    })?;

    Ok(ProfileRecord {
        id: ProfileKey::new(id),
        first_name: entity.first_name,
        last_name: entity.last_name,
        bio: entity.bio,
        avatar_url: entity.avatar_url,
        skills: entity.skills,
        availability: entity.availability,
        total_jobs_completed,
        rating: entity.rating,
    })
}

/// Every whitelisted column set, ready for insert-or-replace.
pub fn contract_to_active(record: ProfileRecord) -> ProfileAM {
    ProfileAM {
        id: Set(key_to_column(record.id)),
        first_name: Set(record.first_name),
        last_name: Set(record.last_name),
        bio: Set(record.bio),
        avatar_url: Set(record.avatar_url),
        skills: Set(record.skills),
        availability: Set(record.availability),
        total_jobs_completed: Set(i64::from(record.total_jobs_completed)),
        rating: Set(record.rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, jobs: i64) -> ProfileEntity {
        ProfileEntity {
            id,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            bio: String::new(),
            avatar_url: String::new(),
            skills: "go,rust".into(),
            availability: true,
            total_jobs_completed: jobs,
            rating: Some(3.5),
        }
    }

    #[test]
    fn maps_row_to_record() {
        let record = entity_to_contract(row(29, 3)).unwrap();
        assert_eq!(record.id.get(), 29);
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.skills, "go,rust");
        assert_eq!(record.total_jobs_completed, 3);
        assert_eq!(record.rating, Some(3.5));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        assert!(entity_to_contract(row(-1, 0)).is_err());
        assert!(entity_to_contract(row(1, -5)).is_err());
    }
}
