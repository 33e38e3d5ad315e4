use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::update_friend::*;
use bursdag_domain::{birthday::parse_birthday, Friend, ID};
use bursdag_infra::BursdagContext;
use chrono_tz::Tz;

pub async fn update_friend_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateFriendUseCase {
        user_id: user.id,
        friend_id: path.into_inner().friend_id,
        name: body.name,
        birthday: body.birthday,
        email: body.email,
        timezone: body.timezone,
        reminder_days_override: body.reminder_days_override,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.friend)))
        .map_err(BursdagError::from)
}

#[derive(Debug)]
pub struct UpdateFriendUseCase {
    pub user_id: ID,
    pub friend_id: ID,
    pub name: String,
    pub birthday: String,
    pub email: Option<String>,
    pub timezone: Option<String>,
    pub reminder_days_override: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub friend: Friend,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotFound(ID),
    EmptyName,
    InvalidBirthday(String),
    InvalidTimezone(String),
    InvalidLeadDays(i64),
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A friend with id {} was not found", id))
            }
            UseCaseError::EmptyName => Self::BadClientData("Name and birthday are required".into()),
            UseCaseError::InvalidBirthday(birthday) => Self::BadClientData(format!(
                "Invalid birthday: {}, must be a calendar date on the form YYYY-MM-DD",
                birthday
            )),
            UseCaseError::InvalidTimezone(timezone) => {
                Self::BadClientData(format!("Invalid timezone: {}", timezone))
            }
            UseCaseError::InvalidLeadDays(days) => Self::BadClientData(format!(
                "The reminder lead time has to be zero or more days, got: {}",
                days
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateFriendUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateFriend";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        let mut friend = match ctx.repos.friends.find(&self.friend_id).await {
            Some(friend) if friend.user_id == self.user_id => friend,
            _ => return Err(UseCaseError::NotFound(self.friend_id.clone())),
        };

        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let birthday = parse_birthday(&self.birthday)
            .map_err(|_| UseCaseError::InvalidBirthday(self.birthday.clone()))?;
        let timezone: Tz = match &self.timezone {
            Some(timezone) => timezone
                .parse()
                .map_err(|_| UseCaseError::InvalidTimezone(timezone.clone()))?,
            None => Tz::UTC,
        };
        if let Some(days) = self.reminder_days_override {
            if days < 0 {
                return Err(UseCaseError::InvalidLeadDays(days));
            }
        }

        friend.name = self.name.clone();
        friend.birthday = birthday;
        friend.email = self.email.clone();
        friend.timezone = timezone;
        friend.reminder_days_override = self.reminder_days_override;
        friend.notes = self.notes.clone();

        ctx.repos
            .friends
            .save(&friend)
            .await
            .map(|_| UseCaseRes { friend })
            .map_err(|_| UseCaseError::StorageError)
    }
}
