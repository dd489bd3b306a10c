use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, email, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }
}
