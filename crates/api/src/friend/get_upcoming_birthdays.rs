use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::dtos::{FriendDTO, UpcomingBirthdayDTO};
use bursdag_api_structs::get_upcoming_birthdays::*;
use bursdag_domain::birthday::{days_until_birthday, next_occurrence};
use bursdag_domain::ID;
use bursdag_infra::BursdagContext;

/// Friends are listed when their birthday is at most this many days
/// away and no other window was asked for
const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 30;

pub async fn get_upcoming_birthdays_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetUpcomingBirthdaysUseCase {
        user_id: user.id,
        days: query.0.days,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            HttpResponse::Ok().json(APIResponse {
                upcoming: usecase_res.upcoming,
            })
        })
        .map_err(BursdagError::from)
}

#[derive(Debug)]
pub struct GetUpcomingBirthdaysUseCase {
    pub user_id: ID,
    pub days: Option<i64>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub upcoming: Vec<UpcomingBirthdayDTO>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidWindow(i64),
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidWindow(days) => Self::BadClientData(format!(
                "The upcoming window has to be zero or more days, got: {}",
                days
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingBirthdaysUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingBirthdays";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        let window = self.days.unwrap_or(DEFAULT_UPCOMING_WINDOW_DAYS);
        if window < 0 {
            return Err(UseCaseError::InvalidWindow(window));
        }

        let today = ctx.sys.get_utc_date();
        let mut upcoming = ctx
            .repos
            .friends
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .filter_map(|friend| {
                let days_until = days_until_birthday(friend.birthday, today);
                if days_until > window {
                    return None;
                }
                Some(UpcomingBirthdayDTO {
                    next_occurrence: next_occurrence(friend.birthday, today),
                    days_until,
                    friend: FriendDTO::new(friend),
                })
            })
            .collect::<Vec<_>>();
        upcoming.sort_by_key(|u| u.days_until);

        Ok(UseCaseRes { upcoming })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bursdag_domain::{Friend, User};
    use bursdag_infra::ISys;
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct StaticDateSys {
        date: NaiveDate,
    }
    impl ISys for StaticDateSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.date.and_hms(12, 0, 0).timestamp_millis()
        }
        fn get_utc_date(&self) -> NaiveDate {
            self.date
        }
    }

    fn ctx_at(date: NaiveDate) -> BursdagContext {
        let mut ctx = bursdag_infra::setup_context_inmemory();
        ctx.sys = Arc::new(StaticDateSys { date });
        ctx
    }

    #[tokio::test]
    async fn it_lists_upcoming_birthdays_sorted_and_windowed() {
        let today = NaiveDate::from_ymd(2023, 6, 1);
        let ctx = ctx_at(today);

        let user = User::new("kari@nordmann.no".into());
        ctx.repos.users.insert(&user).await.unwrap();

        let in_five_days = Friend::new(
            user.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1990, 6, 6),
        );
        let today_friend = Friend::new(
            user.id.clone(),
            "Espen".into(),
            NaiveDate::from_ymd(1988, 6, 1),
        );
        let far_away = Friend::new(
            user.id.clone(),
            "Askeladden".into(),
            NaiveDate::from_ymd(1992, 12, 24),
        );
        for friend in [&in_five_days, &today_friend, &far_away].iter() {
            ctx.repos.friends.insert(friend).await.unwrap();
        }

        let usecase = GetUpcomingBirthdaysUseCase {
            user_id: user.id.clone(),
            days: None,
        };
        let res = execute(usecase, &ctx).await.unwrap();

        assert_eq!(res.upcoming.len(), 2);
        assert_eq!(res.upcoming[0].friend.name, "Espen");
        assert_eq!(res.upcoming[0].days_until, 0);
        assert_eq!(res.upcoming[1].friend.name, "Per");
        assert_eq!(res.upcoming[1].days_until, 5);
    }

    #[tokio::test]
    async fn it_resolves_passed_birthdays_against_next_year() {
        let today = NaiveDate::from_ymd(2023, 12, 1);
        let ctx = ctx_at(today);

        let user = User::new("kari@nordmann.no".into());
        ctx.repos.users.insert(&user).await.unwrap();

        let friend = Friend::new(
            user.id.clone(),
            "Per".into(),
            NaiveDate::from_ymd(1985, 1, 5),
        );
        ctx.repos.friends.insert(&friend).await.unwrap();

        let usecase = GetUpcomingBirthdaysUseCase {
            user_id: user.id.clone(),
            days: Some(60),
        };
        let res = execute(usecase, &ctx).await.unwrap();

        assert_eq!(res.upcoming.len(), 1);
        assert_eq!(
            res.upcoming[0].next_occurrence,
            NaiveDate::from_ymd(2024, 1, 5)
        );
        assert_eq!(res.upcoming[0].days_until, 35);
    }
}
