use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::info;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use crate::snapshot::Snapshot;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.service(web::resource("/koi_min.json").route(web::get().to(get_snapshot)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn get_snapshot(snapshot: web::Data<Option<Snapshot>>) -> HttpResponse {
    match snapshot.get_ref() {
        Some(snapshot) => {
            info!("Serving catalog snapshot ({} records)", snapshot.records().len());
            HttpResponse::Ok().json(snapshot.records())
        }
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Catalog snapshot unavailable".into(),
        }),
    }
}

async fn health(snapshot: web::Data<Option<Snapshot>>) -> HttpResponse {
    let records = snapshot.get_ref().as_ref().map_or(0, |s| s.records().len());
    HttpResponse::Ok().json(json!({ "status": "ok", "records": records }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;
    use shared::DatasetRecord;

    fn frontend_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend")
    }

    fn sample() -> Snapshot {
        Snapshot::parse(r#"[{"kepid": 757450, "kepoi_name": "K00889.01", "koi_period": 8.88}]"#).unwrap()
    }

    #[actix_web::test]
    async fn snapshot_is_served_as_catalog_array() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Some(sample())))
                .configure(|cfg| configure_routes(cfg, frontend_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/koi_min.json").to_request();
        let records: Vec<DatasetRecord> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kepid, 757450);
        assert_eq!(records[0].features.koi_period, Some(8.88));
    }

    #[actix_web::test]
    async fn missing_snapshot_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(None::<Snapshot>))
                .configure(|cfg| configure_routes(cfg, frontend_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/koi_min.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["records"], 0);
    }

    #[actix_web::test]
    async fn health_reports_record_count() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Some(sample())))
                .configure(|cfg| configure_routes(cfg, frontend_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["records"], 1);
    }

    #[actix_web::test]
    async fn index_page_is_served_from_frontend_dir() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Some(sample())))
                .configure(|cfg| configure_routes(cfg, frontend_dir())),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
