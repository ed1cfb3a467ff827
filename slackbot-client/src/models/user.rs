//! Team members.

use serde::{Deserialize, Serialize};
use slackbot_model::{Timestamp, model};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorType {
    App,
    Sms,
}

model! {
    /// Profile fields of a team member.
    pub struct UserProfile {
        avatar_hash: Str as String,
        status_emoji: Str as String,
        status_text: Str as String,
        first_name: Str as String,
        last_name: Str as String,
        real_name: Str as String,
        email: Str as String,
        skype: Str as String,
        phone: Str as String,
        image_24: Str as String,
        image_32: Str as String,
        image_48: Str as String,
        image_192: Str as String,
        image_512: Str as String,
    }
}

model! {
    /// Membership of an Enterprise Grid organization.
    pub struct EnterpriseUser {
        @read_only id: Str as String,
        enterprise_id: Str as String,
        enterprise_name: Str as String,
        is_admin: Bool as bool = false,
        is_owner: Bool as bool = false,
        teams: List as Vec<String>,
    }
}

model! {
    /// A team member.
    pub struct User {
        @read_only id: Str as String,
        name: Str as String,
        deleted: Bool as bool,
        color: Str as String,
        profile: Model as UserProfile,
        is_admin: Bool as bool = false,
        is_owner: Bool as bool = false,
        is_primary_owner: Bool as bool = false,
        is_restricted: Bool as bool = false,
        is_ultra_restricted: Bool as bool = false,
        updated: Timestamp as Timestamp,
        has_2fa: Bool as bool = false,
        two_factor_type: Enum as TwoFactorType,
        enterprise_user: Model as EnterpriseUser,
    }
}
