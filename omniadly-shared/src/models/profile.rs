use serde::{Deserialize, Serialize};

use super::{ProfileStatus, ProfileType};
use crate::format::capitalize_platform;

/// A workspace owned by a user. One user may own several profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_type: ProfileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: ProfileStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Brand as the API returns it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /brands` answers with either a paged result or a bare list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BrandListing {
    Paged { data: Vec<BrandRecord> },
    Plain(Vec<BrandRecord>),
}

impl BrandListing {
    pub fn into_brands(self) -> Vec<Brand> {
        let records = match self {
            Self::Paged { data } | Self::Plain(data) => data,
        };
        records.into_iter().map(Brand::from).collect()
    }
}

/// Brand row shown on the profile detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
}

impl From<BrandRecord> for Brand {
    fn from(record: BrandRecord) -> Self {
        Self {
            id: record.id,
            name: record
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unnamed Brand".to_string()),
            description: record.description.unwrap_or_default(),
            status: if record.is_deleted { "Deleted" } else { "Active" }.to_string(),
            created_at: record.created_at.unwrap_or_default(),
        }
    }
}

/// Linked social network account as the API returns it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub provider_user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Social account row shown on the profile detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    pub id: String,
    pub platform: String,
    pub username: String,
    pub status: String,
    pub created_at: String,
}

fn first_present(candidates: [Option<String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

impl From<SocialAccountRecord> for SocialAccount {
    fn from(record: SocialAccountRecord) -> Self {
        let platform = first_present([record.provider, record.platform]);
        Self {
            id: record.id,
            platform: capitalize_platform(platform.as_deref().unwrap_or_default()),
            username: first_present([record.provider_user_id, record.username])
                .unwrap_or_else(|| "N/A".to_string()),
            status: if record.is_active { "Active" } else { "Inactive" }.to_string(),
            created_at: record.created_at.unwrap_or_default(),
        }
    }
}

/// Team the profile belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub member_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_brand_defaults_name_and_derives_status() {
        let brand = Brand::from(BrandRecord {
            id: "b-1".into(),
            is_deleted: true,
            ..BrandRecord::default()
        });
        assert_eq!(brand.name, "Unnamed Brand");
        assert_eq!(brand.status, "Deleted");

        let brand = Brand::from(BrandRecord {
            id: "b-2".into(),
            name: Some("Acme".into()),
            ..BrandRecord::default()
        });
        assert_eq!(brand.name, "Acme");
        assert_eq!(brand.status, "Active");
    }

    #[test]
    fn test_brand_listing_accepts_both_shapes() {
        let paged: BrandListing =
            serde_json::from_value(json!({ "data": [{ "id": "b-1", "name": "Acme" }], "totalCount": 1 }))
                .unwrap();
        assert_eq!(paged.into_brands().len(), 1);

        let plain: BrandListing =
            serde_json::from_value(json!([{ "id": "b-1" }, { "id": "b-2" }])).unwrap();
        assert_eq!(plain.into_brands().len(), 2);
    }

    #[test]
    fn test_social_account_prefers_provider_fields() {
        let record: SocialAccountRecord = serde_json::from_value(json!({
            "id": "s-1",
            "provider": "FACEBOOK",
            "platform": "tiktok",
            "providerUserId": "1029",
            "username": "acme",
            "isActive": true
        }))
        .unwrap();
        let account = SocialAccount::from(record);
        assert_eq!(account.platform, "Facebook");
        assert_eq!(account.username, "1029");
        assert_eq!(account.status, "Active");
    }

    #[test]
    fn test_social_account_fallbacks() {
        let account = SocialAccount::from(SocialAccountRecord {
            id: "s-2".into(),
            platform: Some("instagram".into()),
            ..SocialAccountRecord::default()
        });
        assert_eq!(account.platform, "Instagram");
        assert_eq!(account.username, "N/A");
        assert_eq!(account.status, "Inactive");

        let account = SocialAccount::from(SocialAccountRecord::default());
        assert_eq!(account.platform, "Unknown");
    }

    #[test]
    fn test_profile_decodes_numeric_codes() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "pr-1",
            "userId": "u-1",
            "name": "Main",
            "profileType": 2,
            "status": 1
        }))
        .unwrap();
        assert_eq!(profile.profile_type.label(), "Pro");
        assert_eq!(profile.status.label(), "Active");
    }
}
