use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    #[serde(rename = "Innovation Manager")]
    InnovationManager,
    #[serde(rename = "Decision Maker")]
    DecisionMaker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::InnovationManager => "Innovation Manager",
            Role::DecisionMaker => "Decision Maker",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "Employee" => Some(Role::Employee),
            "Innovation Manager" => Some(Role::InnovationManager),
            "Decision Maker" => Some(Role::DecisionMaker),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Disabled,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Disabled => "Disabled",
        }
    }

    pub fn parse(s: &str) -> Option<AccountStatus> {
        match s {
            "Active" => Some(AccountStatus::Active),
            "Disabled" => Some(AccountStatus::Disabled),
            _ => None,
        }
    }
}

/// Internal user record for authentication — includes the password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
    pub email: String,
    pub role: Role,
    pub mobile: String,
    pub password: String,
    pub status: AccountStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Safe version for API responses — no password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDisplay {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
    pub email: String,
    pub role: Role,
    pub mobile: String,
    pub status: AccountStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDisplay {
    fn from(u: User) -> Self {
        UserDisplay {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            profile_image: u.profile_image,
            email: u.email,
            role: u.role,
            mobile: u.mobile,
            status: u.status,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Subset of user fields embedded in joined idea listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBrief {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub profile_image: Option<String>,
}

/// New user data for creation. Password is already hashed.
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub profile_image: Option<String>,
    pub email: String,
    pub role: Role,
    pub mobile: String,
    pub password: String,
}

/// Create/update user request body. Enum-valued fields arrive as strings and
/// are parsed in the handler so guard messages stay specific.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub mobile: String,
    // Required for create, optional for update.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}
