//! # Form validation
//!
//! One schema per form — sign-in, sign-up, add-user, edit-user. Each form is a
//! plain struct of raw input strings whose `validate` method returns either
//! the typed request payload ready for [`crate::ApiClient`], or a non-empty
//! [`FieldErrors`] mapping for inline display. Validation is entirely local:
//! a form that fails here never reaches the network.
//!
//! Rules are fixed per field and only the **first** violated rule per field is
//! surfaced, one message per field. The messages are the user-facing copy, so
//! they are part of the contract.

use std::collections::BTreeMap;

use crate::models::{LoginRequest, NewUser, SignupRequest, UserUpdate};

/// Field name → single human-readable message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Sign-in form: email + password.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::email(&mut errors, "email", &self.email);
        rules::min_len(
            &mut errors,
            "password",
            &self.password,
            6,
            "Password must be at least 6 characters",
        );

        if errors.is_empty() {
            Ok(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Sign-up form: the full profile plus password confirmation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<SignupRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::non_empty(&mut errors, "name", &self.name, "Name is required");
        rules::non_empty(&mut errors, "username", &self.username, "Username is required");
        rules::email(&mut errors, "email", &self.email);
        rules::non_empty(
            &mut errors,
            "telephone",
            &self.telephone,
            "Telephone number is required",
        );
        rules::non_empty(&mut errors, "location", &self.location, "Location is required");
        rules::min_len(
            &mut errors,
            "password",
            &self.password,
            6,
            "Password must be at least 6 characters",
        );
        // Mismatch is attached to the confirmation field, independent of the
        // other fields' validity.
        if self.password != self.confirm_password {
            rules::push(&mut errors, "confirm_password", "Passwords do not match");
        }

        if errors.is_empty() {
            Ok(SignupRequest {
                name: self.name.clone(),
                username: self.username.clone(),
                email: self.email.clone(),
                telephone: self.telephone.clone(),
                location: self.location.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Add-user form (the dialog on the users table).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
    pub password: String,
}

impl UserForm {
    /// Whether any field has been edited away from empty. Gates the submit
    /// button, not validation.
    pub fn is_edited(&self) -> bool {
        [
            &self.name,
            &self.username,
            &self.email,
            &self.telephone,
            &self.location,
            &self.password,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }

    pub fn validate(&self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        profile_rules(&mut errors, &self.name, &self.username, &self.email, &self.telephone, &self.location);
        rules::min_len(
            &mut errors,
            "password",
            &self.password,
            6,
            "Password must be at least 6 characters",
        );

        if errors.is_empty() {
            Ok(NewUser {
                name: self.name.clone(),
                username: self.username.clone(),
                email: self.email.clone(),
                telephone: self.telephone.clone(),
                location: self.location.clone(),
                password: self.password.clone(),
                // Self-service creation never mints admins.
                is_admin: false,
            })
        } else {
            Err(errors)
        }
    }
}

/// Edit-user form — the add-user schema minus the password.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserEditForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub telephone: String,
    pub location: String,
}

impl UserEditForm {
    pub fn from_user(user: &store::User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            telephone: user.telephone.clone(),
            location: user.location.clone(),
        }
    }

    /// Produce the full-replacement payload, echoing the immutable `id` and
    /// the existing `is_admin` flag.
    pub fn validate(&self, id: i64, is_admin: bool) -> Result<UserUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        profile_rules(&mut errors, &self.name, &self.username, &self.email, &self.telephone, &self.location);

        if errors.is_empty() {
            Ok(UserUpdate {
                id,
                name: self.name.clone(),
                username: self.username.clone(),
                email: self.email.clone(),
                telephone: self.telephone.clone(),
                location: self.location.clone(),
                is_admin,
            })
        } else {
            Err(errors)
        }
    }
}

/// Shared rules for the add-user and edit-user profile fields. The telephone
/// minimum is 10 here; the sign-up form only requires it non-empty.
fn profile_rules(
    errors: &mut FieldErrors,
    name: &str,
    username: &str,
    email: &str,
    telephone: &str,
    location: &str,
) {
    rules::non_empty(errors, "name", name, "Name is required");
    rules::non_empty(errors, "username", username, "Username is required");
    rules::email(errors, "email", email);
    rules::min_len(errors, "telephone", telephone, 10, "Telephone number is required");
    rules::non_empty(errors, "location", location, "Location is required");
}

mod rules {
    use super::FieldErrors;

    /// Record a message for a field unless an earlier rule already did.
    pub fn push(errors: &mut FieldErrors, field: &'static str, message: &str) {
        errors.entry(field).or_insert_with(|| message.to_string());
    }

    pub fn non_empty(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
        if value.is_empty() {
            push(errors, field, message);
        }
    }

    pub fn min_len(
        errors: &mut FieldErrors,
        field: &'static str,
        value: &str,
        min: usize,
        message: &str,
    ) {
        if value.chars().count() < min {
            push(errors, field, message);
        }
    }

    pub fn email(errors: &mut FieldErrors, field: &'static str, value: &str) {
        if !looks_like_email(value) {
            push(errors, field, "Invalid email address");
        }
    }

    fn looks_like_email(value: &str) -> bool {
        if value.contains(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain.len() > 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_rejects_bad_email_and_short_password() {
        let form = SignInForm {
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["email"], "Invalid email address");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn sign_in_passes_through_valid_input() {
        let form = SignInForm {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn empty_required_fields_each_get_a_message() {
        let errors = SignUpForm::default().validate().unwrap_err();
        for field in ["name", "username", "email", "telephone", "location", "password"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn password_mismatch_lands_exactly_on_the_confirmation_field() {
        let form = SignUpForm {
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "mick@example.com".to_string(),
            telephone: "0123".to_string(),
            location: "Lagos".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["confirm_password"], "Passwords do not match");
    }

    #[test]
    fn sign_up_telephone_only_needs_to_be_non_empty() {
        let form = SignUpForm {
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "mick@example.com".to_string(),
            telephone: "12345".to_string(),
            location: "Lagos".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn add_user_rejects_short_telephone_locally() {
        let form = UserForm {
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "mick@example.com".to_string(),
            telephone: "12345".to_string(),
            location: "Lagos".to_string(),
            password: "secret1".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["telephone"], "Telephone number is required");
    }

    #[test]
    fn add_user_defaults_is_admin_false() {
        let form = UserForm {
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "mick@example.com".to_string(),
            telephone: "0123456789".to_string(),
            location: "Lagos".to_string(),
            password: "secret1".to_string(),
        };
        let new_user = form.validate().unwrap();
        assert!(!new_user.is_admin);
    }

    #[test]
    fn only_first_violated_rule_per_field_is_surfaced() {
        // Every field of the empty form is invalid; each gets exactly one
        // message, the first rule that failed.
        let errors = UserForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors["telephone"], "Telephone number is required");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn edit_form_echoes_id_and_admin_flag() {
        let form = UserEditForm {
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "mick@example.com".to_string(),
            telephone: "0123456789".to_string(),
            location: "Lagos".to_string(),
        };
        let update = form.validate(42, true).unwrap();
        assert_eq!(update.id, 42);
        assert!(update.is_admin);
    }

    #[test]
    fn edit_form_has_no_password_rule() {
        let errors = UserEditForm::default().validate(1, false).unwrap_err();
        assert!(!errors.contains_key("password"));
    }
}
