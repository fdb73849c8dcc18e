//! Validated record construction
//!
//! Demonstrates construct-or-fail semantics over loosely typed input: a
//! `Person` is only ever built from a JSON object carrying the required
//! fields with the right types, and a `Weekday` only from a raw value in
//! range. Invalid input is an error at the construction site, not a
//! half-initialized value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SceneError, SceneResult};
use crate::json_helpers;

/// A person record with validated fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Build from a JSON object; fails if `name` or `age` is absent or
    /// mistyped
    pub fn from_json(dict: &Value) -> SceneResult<Self> {
        let name = json_helpers::get_str(dict, "name")?.to_string();
        let age = json_helpers::get_u64(dict, "age")?;
        let age = u32::try_from(age).map_err(|_| {
            SceneError::InvalidValue("age".to_string(), format!("out of range: {}", age))
        })?;

        Ok(Self { name, age })
    }
}

/// Day of the week, numbered 1 (Sunday) through 7 (Saturday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl TryFrom<u8> for Weekday {
    type Error = SceneError;

    fn try_from(raw: u8) -> SceneResult<Self> {
        match raw {
            1 => Ok(Weekday::Sunday),
            2 => Ok(Weekday::Monday),
            3 => Ok(Weekday::Tuesday),
            4 => Ok(Weekday::Wednesday),
            5 => Ok(Weekday::Thursday),
            6 => Ok(Weekday::Friday),
            7 => Ok(Weekday::Saturday),
            _ => Err(SceneError::InvalidValue(
                "weekday".to_string(),
                format!("expected 1-7, got: {}", raw),
            )),
        }
    }
}

/// Anything with a first and last name
///
/// `full_name` and `greeting` have provided implementations; implementors
/// can override either.
pub trait Named {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn greeting(&self) -> String {
        format!("Hi, my name is {}", self.full_name())
    }
}

/// A user with the default full name and a custom greeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

impl Named for User {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn greeting(&self) -> String {
        format!("Hey there! Nice to meet you. My name is {}.", self.full_name())
    }
}

/// A friend with an optional middle name folded into the full name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
}

impl Named for Friend {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    fn greeting(&self) -> String {
        format!("Hola, {}!", self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_from_valid_json() {
        let dict = json!({"name": "Pasan", "age": 30});
        let person = Person::from_json(&dict).unwrap();
        assert_eq!(person.name, "Pasan");
        assert_eq!(person.age, 30);
    }

    #[test]
    fn test_person_missing_field() {
        let dict = json!({"name": "Pasan"});
        assert!(matches!(
            Person::from_json(&dict),
            Err(SceneError::MissingField(_))
        ));
    }

    #[test]
    fn test_person_mistyped_field() {
        let dict = json!({"name": "Pasan", "age": "thirty"});
        assert!(matches!(
            Person::from_json(&dict),
            Err(SceneError::InvalidValue(_, _))
        ));
    }

    #[test]
    fn test_weekday_from_raw() {
        assert_eq!(Weekday::try_from(4).unwrap(), Weekday::Wednesday);
        assert!(Weekday::try_from(0).is_err());
        assert!(Weekday::try_from(8).is_err());
    }

    #[test]
    fn test_named_default_and_override() {
        let user = User {
            first_name: "Pasan".to_string(),
            last_name: "Premeratne".to_string(),
        };
        assert_eq!(user.full_name(), "Pasan Premeratne");
        assert_eq!(
            user.greeting(),
            "Hey there! Nice to meet you. My name is Pasan Premeratne."
        );

        let friend = Friend {
            first_name: "Amy".to_string(),
            middle_name: Some("Lou".to_string()),
            last_name: "Daniels".to_string(),
        };
        assert_eq!(friend.full_name(), "Amy Lou Daniels");
        assert_eq!(friend.greeting(), "Hola, Amy Lou Daniels!");

        let no_middle = Friend {
            first_name: "Amy".to_string(),
            middle_name: None,
            last_name: "Daniels".to_string(),
        };
        assert_eq!(no_middle.full_name(), "Amy Daniels");
    }
}
