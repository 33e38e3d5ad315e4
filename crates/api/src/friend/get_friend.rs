use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::get_friend::*;
use bursdag_domain::{Friend, ID};
use bursdag_infra::BursdagContext;

pub async fn get_friend_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetFriendUseCase {
        user_id: user.id,
        friend_id: path.into_inner().friend_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.friend)))
        .map_err(BursdagError::from)
}

#[derive(Debug)]
pub struct GetFriendUseCase {
    pub user_id: ID,
    pub friend_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub friend: Friend,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for BursdagError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A friend with id {} was not found", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetFriendUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "GetFriend";

    async fn execute(&mut self, ctx: &BursdagContext) -> Result<Self::Response, Self::Error> {
        // Friends owned by somebody else are indistinguishable from
        // friends that do not exist
        match ctx.repos.friends.find(&self.friend_id).await {
            Some(friend) if friend.user_id == self.user_id => Ok(UseCaseRes { friend }),
            _ => Err(UseCaseError::NotFound(self.friend_id.clone())),
        }
    }
}
