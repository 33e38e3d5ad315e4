use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::get_friends::*;
use bursdag_infra::BursdagContext;

pub async fn get_friends_controller(
    http_req: HttpRequest,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    let friends = ctx
        .repos
        .friends
        .find_by_user(&user.id)
        .await
        .map_err(|_| BursdagError::InternalError)?;

    Ok(HttpResponse::Ok().json(APIResponse::new(friends)))
}
