//! Shared helpers: a fully assembled app on temporary directories

#![allow(dead_code)]

use axum::{
	Router,
	body::Body,
	http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use tower::ServiceExt;

use carpaint::{App, AppBuilder, worker::WorkerPool};
use carpaint_auth_adapter_sqlite::AuthAdapterSqlite;

pub const ADMIN: &str = "admin@x.com";
pub const ADMIN_PASSWORD: &str = "adminpw";
pub const USER: &str = "a@x.com";
pub const USER_PASSWORD: &str = "pw1";

pub struct TestEnv {
	pub app: App,
	pub router: Router,
	pub tmp: TempDir,
}

pub fn write(root: &Path, rel: &str, content: &str) {
	let path = root.join(rel);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).expect("mkdir");
	}
	std::fs::write(path, content).expect("write");
}

fn seed_origin(origin: &Path) {
	write(
		origin,
		"global/seasons.yaml",
		"summer:\n  date_from: \"15.04\"\n  date_to: \"15.10\"\n  est_fuel_cons_for_paint_dry: 2.5\n  est_fuel_cons_for_base_dry: 1.5\nwinter:\n  date_from: \"15.10\"\n  date_to: \"15.04\"\n  est_fuel_cons_for_paint_dry: 4\n  est_fuel_cons_for_base_dry: 2\n",
	);
	write(origin, "global/colors.yaml", "white:\n  hex: \"#ffffff\"\n  rarity: common\n");
	write(origin, "cars/audi.yaml", "A4:\n  body: [sedan, wagon]\n  class: D\n  gen: [B8, B9]\n");
	write(origin, "cars/bmw.yaml", "X5:\n  class: E\n  is_suv: true\n");
}

pub async fn setup() -> TestEnv {
	let tmp = TempDir::new().expect("tmp");
	let root = tmp.path();
	seed_origin(&root.join("data"));
	write(root, "admins.txt", &format!("{}\n", ADMIN));
	write(
		root,
		"users_initial.json",
		&format!(
			r#"{{"{}":"{}","{}":"{}"}}"#,
			ADMIN, ADMIN_PASSWORD, USER, USER_PASSWORD
		),
	);

	let worker = Arc::new(WorkerPool::new(1, 1));
	let adapter = AuthAdapterSqlite::new(worker, root.join("db"), Some("test-secret"))
		.await
		.expect("adapter");

	let mut builder = AppBuilder::new();
	builder
		.origin_dir(root.join("data"))
		.user_data_dir(root.join("userdata"))
		.admins_file(root.join("admins.txt"))
		.users_initial_file(root.join("users_initial.json"))
		.auth_adapter(Arc::new(adapter));
	let app = builder.build().await.expect("build");
	let router = carpaint::routes::init(app.clone());

	TestEnv { app, router, tmp }
}

pub async fn call(
	router: &Router,
	method: &str,
	uri: &str,
	token: Option<&str>,
	body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
	let mut req = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		req = req.header(header::AUTHORIZATION, token);
	}
	let body = match body {
		Some(json) => {
			req = req.header(header::CONTENT_TYPE, "application/json");
			Body::from(json.to_string())
		}
		None => Body::empty(),
	};

	let res = router.clone().oneshot(req.body(body).expect("request")).await.expect("call");
	let status = res.status();
	let bytes = res.into_body().collect().await.expect("body").to_bytes();
	let json = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
	};
	(status, json)
}

pub async fn login(router: &Router, email: &str, password: &str) -> String {
	let (status, body) = call(
		router,
		"POST",
		"/api/v1/login",
		None,
		Some(serde_json::json!({ "email": email, "password": password })),
	)
	.await;
	assert_eq!(status, StatusCode::OK, "login failed for {}", email);
	body["token"].as_str().expect("token").to_string()
}

// vim: ts=4
