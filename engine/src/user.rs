//! User entities held in the roster.

use crate::{
    error::{Error, Result},
    ordering::SortValue,
    HouseNumber, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// Lowest house number accepted by client-side validation.
pub const HOUSE_MIN: HouseNumber = 1;

/// Highest house number accepted by client-side validation.
pub const HOUSE_MAX: HouseNumber = 9999;

/// Role of a user within the condominium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator
    Admin,
    /// Unit owner
    Owner,
    /// Tenant of a unit
    Tenant,
}

/// Account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Normal, usable account
    Active,
    /// Temporarily blocked
    Suspend,
    /// Deactivated account
    Inactive,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Owner => write!(f, "owner"),
            Role::Tenant => write!(f, "tenant"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Active => write!(f, "active"),
            Status::Suspend => write!(f, "suspend"),
            Status::Inactive => write!(f, "inactive"),
        }
    }
}

/// A user of the condominium platform.
///
/// The id is minted by the identity provider and never changes. `houses`
/// holds no duplicates; its order is the order of assignment, which is what
/// tables display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable opaque identifier
    pub id: UserId,
    /// Role within the condominium
    pub role: Role,
    /// Account status
    pub status: Status,
    /// Display name
    pub name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<u64>,
    /// Assigned house numbers, in assignment order
    #[serde(default)]
    pub houses: Vec<HouseNumber>,
    /// Free-form administrator notes
    pub observations: Option<String>,
    /// When the account was created (milliseconds since epoch)
    pub created_at: Timestamp,
    /// When the account was last updated (milliseconds since epoch)
    pub updated_at: Timestamp,
}

/// Sortable fields of a [`User`], for the ordering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    Name,
    Email,
    Phone,
    Role,
    Status,
    Observations,
    CreatedAt,
    UpdatedAt,
}

impl User {
    /// Create a new user with empty optional fields.
    pub fn new(
        id: impl Into<UserId>,
        role: Role,
        status: Status,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            status,
            name: None,
            email: None,
            phone: None,
            houses: Vec::new(),
            observations: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Set the display name (builder style).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact email (builder style).
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the assigned houses (builder style).
    pub fn with_houses(mut self, houses: Vec<HouseNumber>) -> Self {
        self.houses = houses;
        self
    }

    /// Check whether a house number is assigned to this user.
    pub fn has_house(&self, house: HouseNumber) -> bool {
        self.houses.contains(&house)
    }

    /// Validate and append a house number.
    ///
    /// The number must be in range and not already assigned. Assignment
    /// order is preserved.
    pub fn assign_house(&mut self, house: HouseNumber) -> Result<()> {
        validate_house_number(house)?;
        if self.has_house(house) {
            return Err(Error::DuplicateHouse {
                user: self.id.clone(),
                house,
            });
        }
        self.houses.push(house);
        Ok(())
    }

    /// Validate and drop a house number.
    pub fn remove_house(&mut self, house: HouseNumber) -> Result<()> {
        if !self.has_house(house) {
            return Err(Error::HouseNotAssigned {
                user: self.id.clone(),
                house,
            });
        }
        self.houses.retain(|&h| h != house);
        Ok(())
    }

    /// Extract the sortable value for a field.
    ///
    /// Absent optional fields map to [`SortValue::Null`], which the ordering
    /// engine always places last.
    pub fn sort_value(&self, field: UserField) -> SortValue {
        match field {
            UserField::Name => SortValue::from_opt_text(self.name.as_deref()),
            UserField::Email => SortValue::from_opt_text(self.email.as_deref()),
            UserField::Phone => self
                .phone
                .map(|p| SortValue::Number(p as f64))
                .unwrap_or(SortValue::Null),
            UserField::Role => SortValue::Text(self.role.to_string()),
            UserField::Status => SortValue::Text(self.status.to_string()),
            UserField::Observations => SortValue::from_opt_text(self.observations.as_deref()),
            UserField::CreatedAt => SortValue::Number(self.created_at as f64),
            UserField::UpdatedAt => SortValue::Number(self.updated_at as f64),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidPayload(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}

/// Validate that a house number is within the accepted range.
pub fn validate_house_number(house: HouseNumber) -> Result<()> {
    if !(HOUSE_MIN..=HOUSE_MAX).contains(&house) {
        return Err(Error::HouseOutOfRange {
            house,
            min: HOUSE_MIN,
            max: HOUSE_MAX,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user() {
        let user = User::new("u1", Role::Tenant, Status::Active, 1000)
            .with_name("Alice")
            .with_email("alice@example.com");

        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Tenant);
        assert_eq!(user.status, Status::Active);
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert!(user.houses.is_empty());
        assert_eq!(user.created_at, 1000);
        assert_eq!(user.updated_at, 1000);
    }

    #[test]
    fn assign_house_preserves_order() {
        let mut user = User::new("u1", Role::Owner, Status::Active, 1000);
        user.assign_house(102).unwrap();
        user.assign_house(101).unwrap();

        assert_eq!(user.houses, vec![102, 101]);
    }

    #[test]
    fn assign_house_rejects_duplicate() {
        let mut user = User::new("u1", Role::Owner, Status::Active, 1000);
        user.assign_house(101).unwrap();

        let result = user.assign_house(101);
        assert!(matches!(result, Err(Error::DuplicateHouse { .. })));
        assert_eq!(user.houses, vec![101]);
    }

    #[test]
    fn assign_house_rejects_out_of_range() {
        let mut user = User::new("u1", Role::Owner, Status::Active, 1000);

        assert!(matches!(
            user.assign_house(0),
            Err(Error::HouseOutOfRange { .. })
        ));
        assert!(matches!(
            user.assign_house(10_000),
            Err(Error::HouseOutOfRange { .. })
        ));
        assert!(user.houses.is_empty());
    }

    #[test]
    fn remove_house() {
        let mut user =
            User::new("u1", Role::Owner, Status::Active, 1000).with_houses(vec![101, 102, 103]);
        user.remove_house(102).unwrap();

        assert_eq!(user.houses, vec![101, 103]);
    }

    #[test]
    fn remove_house_not_assigned() {
        let mut user = User::new("u1", Role::Owner, Status::Active, 1000);

        let result = user.remove_house(101);
        assert!(matches!(result, Err(Error::HouseNotAssigned { .. })));
    }

    #[test]
    fn sort_value_null_for_absent_fields() {
        let user = User::new("u1", Role::Tenant, Status::Active, 1000);

        assert_eq!(user.sort_value(UserField::Name), SortValue::Null);
        assert_eq!(user.sort_value(UserField::Phone), SortValue::Null);
        assert_eq!(
            user.sort_value(UserField::Role),
            SortValue::Text("tenant".into())
        );
        assert_eq!(
            user.sort_value(UserField::CreatedAt),
            SortValue::Number(1000.0)
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let user = User::new("u1", Role::Admin, Status::Suspend, 1000)
            .with_name("Alice")
            .with_houses(vec![101]);

        let json = user.to_json().unwrap();
        let parsed = User::from_json(&json).unwrap();

        assert_eq!(user, parsed);
    }

    #[test]
    fn serialization_format() {
        let user = User::new("u1", Role::Tenant, Status::Inactive, 1000);
        let json = user.to_json().unwrap();

        assert!(json.contains("createdAt")); // camelCase
        assert!(json.contains("\"role\":\"tenant\""));
        assert!(json.contains("\"status\":\"inactive\""));
    }

    #[test]
    fn deserialization_missing_houses_defaults_empty() {
        let json = r#"{
            "id": "u1",
            "role": "owner",
            "status": "active",
            "name": null,
            "email": null,
            "phone": null,
            "observations": null,
            "createdAt": 1000,
            "updatedAt": 1000
        }"#;

        let user = User::from_json(json).unwrap();
        assert!(user.houses.is_empty());
    }
}
