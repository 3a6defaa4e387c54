use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::{
    dto::{PublicUser, SigninRequest, SignupRequest, TokenResponse},
    error::AuthError,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::{InsertOutcome, User},
};

/// Hash the password and persist a new user, returning the public
/// projection of the created record.
pub async fn signup(db: &PgPool, payload: &SignupRequest) -> Result<PublicUser, AuthError> {
    let hash = hash_password(&payload.password)?;

    match User::insert_if_absent(db, &payload.email, &hash).await? {
        InsertOutcome::Created(user) => {
            info!(user_id = %user.id, email = %user.email, "user signed up");
            Ok(PublicUser::from(&user))
        }
        InsertOutcome::EmailTaken => {
            warn!(email = %payload.email, "signup with taken email");
            Err(AuthError::CredentialsTaken)
        }
    }
}

/// Verify credentials and issue a signed access token.
pub async fn signin(
    db: &PgPool,
    keys: &JwtKeys,
    payload: &SigninRequest,
) -> Result<TokenResponse, AuthError> {
    let user = match User::find_by_email(db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "signin with unknown email");
            return Err(AuthError::CredentialsInvalid);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "signin with wrong password");
        return Err(AuthError::CredentialsInvalid);
    }

    let access_token = keys.sign(user.id, &user.email)?;
    info!(user_id = %user.id, "user signed in");
    Ok(TokenResponse { access_token })
}
