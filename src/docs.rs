use crate::api::register::{
    EditFieldRequest, ExportRequest, RegisterListResponse, RegisterQuery, StatsResponse,
};
use crate::model::field::EditableField;
use crate::model::record::{Record, Status};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Register API",
        version = "1.0.0",
        description = r#"
## Payroll Register Service

This API powers a **payroll register**: a grid of employee pay records with
derived financial fields, single-step undo, text filtering, batch
persistence, and export to a printable report.

### Key Features
- **Record editing**
  - Append blank rows, edit any input column, undo the last change
  - Derived columns (rates, gross pay, total deductions, net pay) are
    recomputed after every edit and can never go stale
- **Filtering**
  - Case-insensitive substring search over all columns, plus dedicated
    ID and payment-date filters, combined with AND semantics
- **Persistence**
  - Submit upserts the whole register in one transaction; a failure rolls
    the batch back and keeps the local data intact
- **Reporting**
  - Stats summary (count, active count, average basic salary)
  - CSV export of the full register

### Response Format
- JSON-based RESTful responses
- Errors are returned as `{"message": "..."}`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::register::list_records,
        crate::api::register::add_row,
        crate::api::register::edit_field,
        crate::api::register::undo,
        crate::api::register::submit,
        crate::api::register::refresh,
        crate::api::register::get_stats,
        crate::api::register::export_report
    ),
    components(
        schemas(
            Record,
            Status,
            EditableField,
            EditFieldRequest,
            ExportRequest,
            RegisterQuery,
            RegisterListResponse,
            StatsResponse
        )
    ),
    tags(
        (name = "Register", description = "Payroll register editing, persistence, and export APIs"),
    )
)]
pub struct ApiDoc;
