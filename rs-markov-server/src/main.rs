mod config;

use std::io;

use actix_cors::Cors;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use rs_markov_core::{GenerationRequest, MarkovGenerator};

use crate::config::ServerConfig;

/// Optional seed for reproducible output, next to the generation parameters
/// in the query string.
#[derive(Deserialize)]
struct SeedQuery {
	seed: Option<u64>,
}

/// HTTP POST endpoint `/v1/generate`
///
/// The request body is the uploaded text; an empty body counts as no file.
/// Query parameters: `phrase_range_size`, `output_size` and optionally `seed`.
/// Returns the generated text, or the validation message with a 400.
#[post("/v1/generate")]
async fn post_generate(
	request: web::Query<GenerationRequest>,
	seed: web::Query<SeedQuery>,
	body: web::Bytes,
) -> impl Responder {
	let request = request.into_inner();
	let seed = seed.seed;
	log::debug!("generate: {:?}, {} bytes, seed {:?}", request, body.len(), seed);

	let result = web::block(move || {
		let content = if body.is_empty() { None } else { Some(body.as_ref()) };
		match seed {
			Some(seed) => MarkovGenerator::seeded(seed).generate_request(content, &request),
			None => MarkovGenerator::from_entropy().generate_request(content, &request),
		}
	})
	.await;

	match result {
		Ok(Ok(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Ok(Err(e)) => {
			log::info!("rejected generation request: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
		Err(e) => {
			log::error!("generation task failed: {e}");
			HttpResponse::InternalServerError().body("Generation failed")
		}
	}
}

#[get("/v1/health")]
async fn get_health() -> impl Responder {
	HttpResponse::Ok().body("ok")
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(post_generate).service(get_health);
}

fn cors(config: &ServerConfig) -> Cors {
	match &config.cors_origin {
		Some(origin) => Cors::default()
			.allowed_origin(origin)
			.allowed_methods(vec!["GET", "POST"])
			.allow_any_header(),
		None => Cors::permissive(),
	}
}

/// Main entry point for the server.
///
/// Reads `ServerConfig` from the environment and starts an Actix-web HTTP
/// server. Each request builds its own chain; nothing is shared between
/// workers.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
	log::info!(
		"listening on {}:{} (max upload {} bytes)",
		config.host,
		config.port,
		config.max_upload
	);

	let app_config = config.clone();
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors(&app_config))
			.app_data(web::PayloadConfig::new(app_config.max_upload))
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	const CORPUS: &str = "the cat sat on the mat the cat ran";

	async fn call(uri: &str, body: &'static str, limit: usize) -> (StatusCode, String) {
		let app = test::init_service(
			App::new()
				.app_data(web::PayloadConfig::new(limit))
				.configure(routes),
		)
			.await;
		let req = test::TestRequest::post().uri(uri).set_payload(body).to_request();
		let resp = test::call_service(&app, req).await;
		let status = resp.status();
		let body = test::read_body(resp).await;
		(status, String::from_utf8_lossy(&body).into_owned())
	}

	#[actix_web::test]
	async fn generates_from_uploaded_text() {
		let (status, body) = call("/v1/generate?phrase_range_size=1&output_size=1&seed=3", CORPUS, 1024).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.starts_with(' '));
		assert_eq!(body.split_whitespace().count(), 1);
	}

	#[actix_web::test]
	async fn same_seed_same_text() {
		let uri = "/v1/generate?phrase_range_size=1&output_size=5&seed=42";
		let (_, first) = call(uri, CORPUS, 1024).await;
		let (_, second) = call(uri, CORPUS, 1024).await;
		assert_eq!(first, second);
	}

	#[actix_web::test]
	async fn validation_failures_are_bad_requests() {
		let (status, body) = call("/v1/generate?phrase_range_size=0&output_size=0", CORPUS, 1024).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "Size of your option cannot be less than 1");

		let (status, body) = call("/v1/generate?phrase_range_size=10&output_size=20", "", 1024).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "File value is null. Need to add an acceptable txt file.");

		let (status, body) = call("/v1/generate?phrase_range_size=5&output_size=2", CORPUS, 1024).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "Output size is less than the phrase range size");

		let (status, body) = call("/v1/generate?phrase_range_size=2&output_size=9", CORPUS, 1024).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "Output size is greater than the length of the word");
	}

	#[actix_web::test]
	async fn negative_sizes_reach_validation() {
		let (status, body) = call("/v1/generate?phrase_range_size=-3&output_size=4", CORPUS, 1024).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body, "Size of your option cannot be less than 1");
	}

	#[actix_web::test]
	async fn oversized_upload_is_rejected() {
		let (status, _) = call("/v1/generate?phrase_range_size=1&output_size=1", CORPUS, 8).await;
		assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
	}

	#[actix_web::test]
	async fn query_string_maps_onto_request() {
		let query = web::Query::<GenerationRequest>::from_query("phrase_range_size=2&output_size=-5&seed=9")
			.expect("query parses");
		assert_eq!(query.into_inner(), GenerationRequest::new(2, -5));
		assert!(web::Query::<GenerationRequest>::from_query("phrase_range_size=2").is_err());
	}

	#[actix_web::test]
	async fn health() {
		let app = test::init_service(App::new().configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/health").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, "ok");
	}
}
