use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use actix_web::error::ErrorInternalServerError;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info};
use utoipa::{IntoParams, ToSchema};

use crate::model::field::EditableField;
use crate::model::record::{COLUMN_LABELS, Record, Status};
use crate::register::{Register, filter, stats};
use crate::{persistence, report};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RegisterQuery {
    /// Case-insensitive substring matched against every display column.
    #[param(example = "Ahmed")]
    pub search: Option<String>,

    /// Substring matched against the id column only.
    #[param(example = "3")]
    pub id: Option<String>,

    /// Substring matched against the payment date only.
    #[param(example = "2024-01")]
    pub date: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterListResponse {
    pub data: Vec<Record>,
    #[schema(example = 5)]
    pub total: usize,
}

#[derive(Deserialize, ToSchema)]
pub struct EditFieldRequest {
    #[schema(example = "basic_salary")]
    pub field: EditableField,

    /// Raw text as typed into the cell; numeric fields parse forgivingly.
    #[schema(example = "5200")]
    pub value: String,
}

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    #[schema(example = 5)]
    pub count: usize,
    #[schema(example = 5)]
    pub active: usize,
    #[schema(example = 5160.0)]
    pub average_basic_salary: f64,
    #[schema(example = "$5160.00")]
    pub average_basic_salary_display: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ExportRequest {
    #[schema(example = "/tmp/payroll_register.csv")]
    pub path: String,
}

fn lock_register(data: &web::Data<Mutex<Register>>) -> actix_web::Result<MutexGuard<'_, Register>> {
    data.lock()
        .map_err(|_| ErrorInternalServerError("register state unavailable"))
}

#[utoipa::path(
    get,
    path = "/api/v1/register",
    params(RegisterQuery),
    responses(
        (status = 200, body = RegisterListResponse)
    ),
    tag = "Register"
)]
pub async fn list_records(
    register: web::Data<Mutex<Register>>,
    query: web::Query<RegisterQuery>,
) -> actix_web::Result<impl Responder> {
    let register = lock_register(&register)?;

    let data: Vec<Record> = filter::filter_records(
        register.all(),
        query.search.as_deref().unwrap_or(""),
        query.id.as_deref().unwrap_or(""),
        query.date.as_deref().unwrap_or(""),
    )
    .into_iter()
    .cloned()
    .collect();

    Ok(HttpResponse::Ok().json(RegisterListResponse {
        total: data.len(),
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/register/rows",
    responses(
        (status = 201, description = "Blank row appended", body = Record)
    ),
    tag = "Register"
)]
pub async fn add_row(register: web::Data<Mutex<Register>>) -> actix_web::Result<impl Responder> {
    let mut register = lock_register(&register)?;
    let record = register.add_row().clone();
    info!(id = record.id, "added register row");

    Ok(HttpResponse::Created().json(record))
}

#[utoipa::path(
    put,
    path = "/api/v1/register/rows/{id}/field",
    request_body = EditFieldRequest,
    params(
        ("id", description = "Record ID")
    ),
    responses(
        (status = 200, description = "Field updated, derived columns recomputed", body = Record),
        (status = 404, description = "Unknown record id"),
        (status = 422, description = "Field is write-once")
    ),
    tag = "Register"
)]
pub async fn edit_field(
    register: web::Data<Mutex<Register>>,
    path: web::Path<u64>,
    body: web::Json<EditFieldRequest>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let mut register = lock_register(&register)?;

    let record = register.set_field(id, body.field, &body.value)?.clone();
    debug!(id, field = %body.field, "register field edited");

    Ok(HttpResponse::Ok().json(record))
}

#[utoipa::path(
    post,
    path = "/api/v1/register/undo",
    responses(
        (status = 200, description = "Last edit undone, or nothing to undo", body = Object)
    ),
    tag = "Register"
)]
pub async fn undo(register: web::Data<Mutex<Register>>) -> actix_web::Result<impl Responder> {
    let mut register = lock_register(&register)?;

    match register.undo_last() {
        Some((id, field)) => {
            let record = register.get(id)?.clone();
            debug!(id, field = %field, "undid last register edit");
            Ok(HttpResponse::Ok().json(json!({
                "message": "last change undone",
                "record": record
            })))
        }
        None => Ok(HttpResponse::Ok().json(json!({
            "message": "no changes to undo"
        }))),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/register/submit",
    responses(
        (status = 200, description = "All rows upserted; records marked Active", body = Object),
        (status = 503, description = "Batch rolled back; records marked Failed, data kept")
    ),
    tag = "Register"
)]
pub async fn submit(
    register: web::Data<Mutex<Register>>,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    // Snapshot under the lock, persist without it; the guard must not be
    // held across the database round-trip.
    let snapshot = lock_register(&register)?.all().to_vec();

    match persistence::save_all(pool.get_ref(), &snapshot).await {
        Ok(saved) => {
            lock_register(&register)?.mark_all(Status::Active);
            info!(saved, "register submitted");
            Ok(HttpResponse::Ok().json(json!({
                "message": format!("{saved} records submitted successfully"),
                "saved": saved
            })))
        }
        Err(err) => {
            error!(error = %err, "submit failed, batch rolled back");
            lock_register(&register)?.mark_all(Status::Failed);
            Err(err.into())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/register/refresh",
    responses(
        (status = 200, description = "Register reloaded from the database", body = Object),
        (status = 503, description = "Load failed; local state unchanged")
    ),
    tag = "Register"
)]
pub async fn refresh(
    register: web::Data<Mutex<Register>>,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let records = persistence::load_all(pool.get_ref()).await.map_err(|err| {
        error!(error = %err, "refresh failed, keeping local data");
        err
    })?;

    let total = records.len();
    lock_register(&register)?.replace_all(records);
    info!(total, "register refreshed from database");

    Ok(HttpResponse::Ok().json(json!({
        "message": "data refreshed successfully",
        "total": total
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/register/stats",
    responses(
        (status = 200, body = StatsResponse)
    ),
    tag = "Register"
)]
pub async fn get_stats(register: web::Data<Mutex<Register>>) -> actix_web::Result<impl Responder> {
    let register = lock_register(&register)?;
    let records = register.all();
    let average = stats::average_basic_salary(records);

    Ok(HttpResponse::Ok().json(StatsResponse {
        count: stats::count(records),
        active: stats::active_count(records),
        average_basic_salary: average,
        average_basic_salary_display: stats::format_currency(average),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/register/export",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "CSV report written", body = Object),
        (status = 500, description = "Export failed; register unaffected")
    ),
    tag = "Register"
)]
pub async fn export_report(
    register: web::Data<Mutex<Register>>,
    body: web::Json<ExportRequest>,
) -> actix_web::Result<impl Responder> {
    let snapshot = lock_register(&register)?.all().to_vec();
    let target = body.path.clone();

    // File IO is a boundary call; keep it off the interaction path.
    let rows = web::block(move || {
        report::write_csv_report(&snapshot, &COLUMN_LABELS, Path::new(&target))
    })
    .await??;
    info!(path = %body.path, rows, "register exported");

    Ok(HttpResponse::Ok().json(json!({
        "message": "report exported successfully",
        "path": body.path,
        "rows": rows
    })))
}
