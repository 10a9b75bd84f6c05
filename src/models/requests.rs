use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};
use crate::models::domain::{NewUser, SwipeAction};

/// Request to register a user
///
/// Missing or `null` fields deserialize to empty values and `age` accepts any
/// integer, so that every failing field is reported by validation instead of
/// the first serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 1, message = "age must be a positive integer"))]
    pub age: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "gender is required"))]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1, message = "zone_id is required"))]
    pub zone_id: String,
}

const CREATE_USER_FIELDS: [&str; 4] = ["name", "age", "gender", "zone_id"];

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateUserRequest {
    /// Validate and convert into registration input, collecting every message
    pub fn into_new_user(self) -> Result<NewUser, Vec<String>> {
        if let Err(errors) = self.validate() {
            return Err(validation_messages(&errors, &CREATE_USER_FIELDS));
        }

        let age = u32::try_from(self.age)
            .map_err(|_| vec!["age must be a positive integer".to_string()])?;

        Ok(NewUser {
            name: self.name,
            age,
            gender: self.gender,
            zone_id: self.zone_id,
        })
    }
}

/// Flatten validator errors into messages, in declared field order
fn validation_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect()
}

/// Request to record a swipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSwipeRequest {
    #[serde(default)]
    pub swiper_id: String,
    #[serde(default)]
    pub swiped_id: String,
    #[serde(default)]
    pub action: String,
}

impl CreateSwipeRequest {
    /// Parse identifiers and action tag, reporting every invalid field
    pub fn parse(&self) -> Result<(Uuid, Uuid, SwipeAction), Vec<String>> {
        let swiper_id = Uuid::parse_str(&self.swiper_id);
        let swiped_id = Uuid::parse_str(&self.swiped_id);
        let action = self.action.parse::<SwipeAction>();

        match (swiper_id, swiped_id, action) {
            (Ok(swiper), Ok(swiped), Ok(action)) => Ok((swiper, swiped, action)),
            (swiper, swiped, action) => {
                let mut errors = Vec::new();
                if swiper.is_err() {
                    errors.push("swiper_id must be a valid UUID".to_string());
                }
                if swiped.is_err() {
                    errors.push("swiped_id must be a valid UUID".to_string());
                }
                if action.is_err() {
                    errors.push("action must be LIKE or PASS".to_string());
                }
                Err(errors)
            }
        }
    }
}

/// `?user_id=` query used by the feed and match listing endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn parse(&self) -> Result<Uuid, String> {
        match self.user_id.as_deref() {
            None | Some("") => Err("user_id query parameter is required".to_string()),
            Some(raw) => {
                Uuid::parse_str(raw).map_err(|_| "user_id must be a valid UUID".to_string())
            }
        }
    }
}
