use crate::{api::register, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/register")
                // /register
                .service(web::resource("").route(web::get().to(register::list_records)))
                // /register/rows
                .service(web::resource("/rows").route(web::post().to(register::add_row)))
                // /register/rows/{id}/field
                .service(
                    web::resource("/rows/{id}/field").route(web::put().to(register::edit_field)),
                )
                .service(web::resource("/undo").route(web::post().to(register::undo)))
                .service(web::resource("/submit").route(web::post().to(register::submit)))
                .service(web::resource("/refresh").route(web::post().to(register::refresh)))
                .service(web::resource("/stats").route(web::get().to(register::get_stats)))
                .service(web::resource("/export").route(web::post().to(register::export_report))),
        ),
    );
}
