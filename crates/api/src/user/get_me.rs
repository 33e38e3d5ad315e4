use crate::error::BursdagError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpRequest, HttpResponse};
use bursdag_api_structs::get_me::*;
use bursdag_infra::BursdagContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<BursdagContext>,
) -> Result<HttpResponse, BursdagError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
