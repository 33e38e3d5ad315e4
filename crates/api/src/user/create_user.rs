use crate::error::BursdagError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bursdag_api_structs::create_user::*;
use bursdag_domain::User;
use bursdag_infra::BursdagContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let usecase = CreateUserUseCase {
        email: body.0.email,
        name: body.0.name,
        reminder_default_days: body.0.reminder_default_days,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(BursdagError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub email: String,
    pub name: Option<String>,
    pub reminder_default_days: Option<i64>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    EmailAlreadyInUse(String),
    InvalidEmail(String),
    InvalidLeadDays(i64),
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::EmailAlreadyInUse(email) => Self::Conflict(format!(
                "A user with the email {} already exists. Emails need to be unique.",
                email
            )),
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("The email {} is not a valid email address", email))
            }
            UseCaseError::InvalidLeadDays(days) => Self::BadClientData(format!(
                "The reminder lead time has to be zero or more days, got: {}",
                days
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(UseCaseError::InvalidEmail(self.email.clone()));
        }
        if let Some(days) = self.reminder_default_days {
            if days < 0 {
                return Err(UseCaseError::InvalidLeadDays(days));
            }
        }

        if ctx.repos.users.find_by_email(&email).await.is_some() {
            return Err(UseCaseError::EmailAlreadyInUse(email));
        }

        let mut user = User::new(email);
        user.name = self.name.clone();
        if let Some(days) = self.reminder_default_days {
            user.reminder_default_days = days;
        }

        let res = ctx.repos.users.insert(&user).await;
        match res {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
