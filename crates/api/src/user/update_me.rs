use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::update_me::*;
use bursdag_domain::User;
use bursdag_infra::BursdagContext;

pub async fn update_me_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateMeUseCase {
        user,
        name: body.0.name,
        reminder_default_days: body.0.reminder_default_days,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.user)))
        .map_err(BursdagError::from)
}

#[derive(Debug)]
pub struct UpdateMeUseCase {
    pub user: User,
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
    InvalidLeadDays(i64),
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidLeadDays(days) => Self::BadClientData(format!(
                "The reminder lead time has to be zero or more days, got: {}",
                days
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMeUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMe";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();

        if let Some(name) = &self.name {
            user.name = Some(name.clone());
        }
        if let Some(days) = self.reminder_default_days {
            if days < 0 {
                return Err(UseCaseError::InvalidLeadDays(days));
            }
            user.reminder_default_days = days;
        }

        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| UseCaseRes { user })
            .map_err(|_| UseCaseError::StorageError)
    }
}
