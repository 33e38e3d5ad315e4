mod create_friend;
mod delete_friend;
mod get_friend;
mod get_friends;
mod get_upcoming_birthdays;
mod update_friend;

use actix_web::web;
use create_friend::create_friend_controller;
use delete_friend::delete_friend_controller;
use get_friend::get_friend_controller;
use get_friends::get_friends_controller;
use get_upcoming_birthdays::get_upcoming_birthdays_controller;
use update_friend::update_friend_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/friend", web::post().to(create_friend_controller));
    cfg.route("/friend", web::get().to(get_friends_controller));
    cfg.route(
        "/friend/upcoming",
        web::get().to(get_upcoming_birthdays_controller),
    );
    cfg.route("/friend/{friend_id}", web::get().to(get_friend_controller));
    cfg.route(
        "/friend/{friend_id}",
        web::put().to(update_friend_controller),
    );
    cfg.route(
        "/friend/{friend_id}",
        web::delete().to(delete_friend_controller),
    );
}
