use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::auth::LoginForm;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Hash a plain password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            log::error!("Failed to hash password: {err}");
            ServiceError::Form("could not process the password".to_string())
        })
}

fn verify_password(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Check the submitted credentials against the stored account.
///
/// Unknown accounts and wrong passwords are indistinguishable to the
/// caller.
pub fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user = repo
        .get_user_by_email(&form.normalized_email())
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&user.password_hash, &form.password) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(AuthenticatedUser::from(&user))
}
