use sqlx::PgPool;
use std::sync::Arc;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto, RegisterRequestDto,
};
use crate::features::auth::model::{AuthenticatedUser, TokenUser};
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::auth::services::TokenService;
use crate::features::users::models::{User, USER_COLUMNS};
use crate::shared::constants::ROLE_STANDARD;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Local email/password accounts and bearer token resolution
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Register a new user with the standard role and log them in
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let role_id: i32 = sqlx::query_scalar("SELECT id FROM roles WHERE name = $1")
            .bind(ROLE_STANDARD)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load default role"))?
            .ok_or_else(|| {
                AppError::Internal(format!("Default role '{}' is missing", ROLE_STANDARD))
            })?;

        let password_hash = run_blocking(move || hash_password(&dto.password)).await?;

        let sql = format!(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, role_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        );
        let user: User = sqlx::query_as(&sql)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(dto.email.trim().to_lowercase())
            .bind(&password_hash)
            .bind(role_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match map_db_error(e, "Failed to register user") {
                AppError::Conflict(_) => AppError::Conflict("Email already registered".to_string()),
                other => other,
            })?;

        tracing::info!("User registered: id={}", user.id);

        self.auth_response(user)
    }

    /// Exchange email and password for a bearer token
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user: Option<User> = sqlx::query_as(&sql)
            .bind(dto.email.trim().to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to load user"))?;

        // Same answer for unknown email and wrong password
        let user = user.ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let stored_hash = user.password_hash.clone();
        let password = dto.password;
        let matches = run_blocking(move || Ok(verify_password(&password, &stored_hash))).await?;
        if !matches {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        tracing::info!("User logged in: id={}", user.id);

        self.auth_response(user)
    }

    /// Verify a bearer token and resolve the caller's current role name
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.tokens.verify(token)?;

        let role_name: Option<String> = sqlx::query_scalar("SELECT name FROM roles WHERE id = $1")
            .bind(claims.user.role_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to resolve role"))?;

        let role_name = role_name.ok_or_else(|| {
            AppError::Auth(format!("Role {} no longer exists", claims.user.role_id))
        })?;

        Ok(AuthenticatedUser {
            id: claims.user.id,
            email: claims.user.email,
            role_id: claims.user.role_id,
            role_name,
        })
    }

    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<MeResponseDto> {
        Ok(user.into())
    }

    fn auth_response(&self, user: User) -> Result<AuthResponseDto> {
        let issued = self.tokens.issue(TokenUser {
            id: user.id,
            email: user.email.clone(),
            role_id: user.role_id,
        })?;

        Ok(AuthResponseDto {
            access_token: issued.access_token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
            user: AuthUserDto {
                id: user.id,
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
                image: user.image,
                role_id: user.role_id,
            },
        })
    }
}

/// Argon2 is CPU bound; keep it off the async workers
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Password task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, test_config, token_for};
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn service(pool: PgPool) -> AuthService {
        AuthService::new(pool, Arc::new(TokenService::new(&test_config().auth)))
    }

    fn registration(email: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: email.to_string(),
            password: "correct horse battery".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_register_login_and_authenticate(pool: PgPool) {
        let service = service(pool);

        let registered = service
            .register(registration("Lucia@Example.com"))
            .await
            .unwrap();
        assert_eq!(registered.user.email, "lucia@example.com");
        assert_eq!(registered.user.role_id, 2);

        let logged_in = service
            .login(credentials("LUCIA@example.com", "correct horse battery"))
            .await
            .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);

        let identity = service.authenticate(&logged_in.access_token).await.unwrap();
        assert_eq!(identity.id, registered.user.id);
        assert_eq!(identity.role_name, ROLE_STANDARD);
        assert!(!identity.is_admin());
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_duplicate_email_conflicts(pool: PgPool) {
        let service = service(pool);

        service.register(registration("dup@example.com")).await.unwrap();
        match service.register(registration("dup@example.com")).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "Email already registered"),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_bad_credentials_share_one_message(pool: PgPool) {
        let service = service(pool);
        service.register(registration("ana@example.com")).await.unwrap();

        for attempt in [
            credentials("ana@example.com", "wrong password"),
            credentials("nobody@example.com", "correct horse battery"),
        ] {
            match service.login(attempt).await {
                Err(AppError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
                other => panic!("expected Unauthorized, got {:?}", other),
            }
        }
    }

    #[sqlx::test]
    #[ignore = "needs DATABASE_URL"]
    async fn test_role_name_is_resolved_from_the_database(pool: PgPool) {
        let service = service(pool);

        let admin = service
            .authenticate(&token_for(&create_admin_user()))
            .await
            .unwrap();
        assert!(admin.is_admin());

        let mut orphan = create_admin_user();
        orphan.role_id = 77;
        let token = token_for(&orphan);

        assert!(matches!(
            service.authenticate(&token).await,
            Err(AppError::Auth(_))
        ));
    }
}
