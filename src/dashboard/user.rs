use super::form::Draft;
use crate::errors::ValidationError;
use crate::models::{Role, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone_number: String,
    pub role: Role,
}

impl UserDraft {
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        self.phone_number = value.into();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}

impl Draft for UserDraft {
    type Record = User;

    const ENTITY: &'static str = "User";

    fn from_record(record: &User) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            address: record.address.clone(),
            phone_number: record.phone_number.clone(),
            role: record.role,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    fn to_record(&self, id: String) -> User {
        User {
            id: Some(id),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_email_and_password() {
        let mut draft = UserDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
        draft.set_full_name("Ada");
        draft.set_email("ada@example.com");
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
        draft.set_password("secret");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn address_and_phone_are_optional() {
        let draft = UserDraft {
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            ..UserDraft::default()
        };
        let record = draft.to_record("12".into());
        assert_eq!(record.role, Role::User);
        assert_eq!(record.address, "");
        assert_eq!(UserDraft::from_record(&record), draft);
    }
}
