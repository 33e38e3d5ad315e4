pub mod create_user;
mod get_me;
mod update_me;

use actix_web::web;
use create_user::create_user_controller;
use get_me::get_me_controller;
use update_me::update_me_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::post().to(create_user_controller));
    cfg.route("/me", web::get().to(get_me_controller));
    cfg.route("/me", web::put().to(update_me_controller));
}
