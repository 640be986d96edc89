use std::env;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};

use humanizer_core::{Humanizer, Probabilities, StdRng, Tone};
use serde::Deserialize;

/// Upper bound on the number of variants served by `/v1/variants`.
const MAX_VARIANTS: usize = 10;

/// JSON body of the `/v1/humanize` and `/v1/variants` endpoints
#[derive(Deserialize)]
struct HumanizeParams {
	text: String,
	tone: Option<String>,
	probabilities: Option<Probabilities>,
	seed: Option<u64>,
	count: Option<usize>,
}

impl HumanizeParams {
	/// Resolves the requested tone, casual when absent.
	fn tone(&self) -> Result<Tone, String> {
		match &self.tone {
			None => Ok(Tone::default()),
			Some(s) => s.parse(),
		}
	}

	/// Resolves the requested probabilities, defaults when absent.
	fn probabilities(&self) -> Result<Probabilities, String> {
		let probabilities = self.probabilities.clone().unwrap_or_default();
		probabilities.validate()?;
		Ok(probabilities)
	}

	/// Number of variants asked for (1..=MAX_VARIANTS), 3 by default.
	fn count(&self) -> Result<usize, String> {
		match self.count {
			None => Ok(3),
			Some(n) if (1..=MAX_VARIANTS).contains(&n) => Ok(n),
			Some(n) => Err(format!("count must be between 1 and {}, got {}", MAX_VARIANTS, n)),
		}
	}

	/// Builds a humanizer configured from the parameters.
	///
	/// The output is reproducible when `seed` is set.
	fn humanizer(&self) -> Result<Humanizer<StdRng>, String> {
		let humanizer = match self.seed {
			Some(seed) => Humanizer::seeded(seed),
			None => Humanizer::from_os_rng(),
		};
		humanizer.with_probabilities(self.probabilities()?)
	}
}

/// HTTP POST endpoint `/v1/humanize`
///
/// Returns the humanized text as the response body.
#[post("/v1/humanize")]
async fn post_humanize(params: web::Json<HumanizeParams>) -> impl Responder {
	let result = params
		.tone()
		.and_then(|tone| Ok(params.humanizer()?.humanize(&params.text, tone)));
	match result {
		Ok(output) => {
			log::debug!("humanized {} byte(s) into {} byte(s)", params.text.len(), output.len());
			HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(output)
		}
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP POST endpoint `/v1/variants`
///
/// Returns a JSON array of independent rewrites of the same text.
#[post("/v1/variants")]
async fn post_variants(params: web::Json<HumanizeParams>) -> impl Responder {
	let count = match params.count() {
		Ok(n) => n,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let result = params
		.tone()
		.and_then(|tone| Ok(params.humanizer()?.variants(&params.text, tone, count)));
	match result {
		Ok(variants) => HttpResponse::Ok().json(variants),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

#[get("/v1/tones")]
async fn get_tones() -> impl Responder {
	let names = Tone::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>();
	HttpResponse::Ok().body(names.join("\n"))
}

/// Reads the bind address from `HUMANIZER_HOST` / `HUMANIZER_PORT`.
fn bind_address() -> Result<(String, u16), String> {
	let host = env::var("HUMANIZER_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
	let port = match env::var("HUMANIZER_PORT") {
		Ok(s) => s.parse::<u16>().map_err(|e| format!("Invalid HUMANIZER_PORT '{}': {}", s, e))?,
		Err(_) => 5000,
	};
	Ok((host, port))
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the humanizer.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000 unless `HUMANIZER_HOST` / `HUMANIZER_PORT` say otherwise.
/// - Log level defaults to `info`, overridable through `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let (host, port) = bind_address().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	log::info!("Starting humanizer server at {}:{}", host, port);

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(post_humanize)
			.service(post_variants)
			.service(get_tones)
	})
		.bind((host, port))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	macro_rules! app {
		() => {
			test::init_service(App::new().service(post_humanize).service(post_variants).service(get_tones)).await
		};
	}

	#[actix_web::test]
	async fn lists_tones() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/tones").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, web::Bytes::from_static(b"casual\nformal\npersuasive"));
	}

	#[actix_web::test]
	async fn humanizes_with_silent_probabilities() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/v1/humanize")
			.set_json(serde_json::json!({
				"text": "I will utilize this tool.",
				"tone": "Formal",
				"probabilities": Probabilities::silent(),
			}))
			.to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, web::Bytes::from_static(b"I will use this tool."));
	}

	#[actix_web::test]
	async fn rejects_unknown_tone() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/v1/humanize")
			.set_json(serde_json::json!({ "text": "Hello.", "tone": "sarcastic" }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn rejects_invalid_probability() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/v1/humanize")
			.set_json(serde_json::json!({ "text": "Hello.", "probabilities": { "filler": 3.0 } }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn seeded_variants_are_reproducible() {
		let app = app!();
		let body = serde_json::json!({ "text": "This is a good plan. We cannot wait.", "seed": 11, "count": 4 });

		let req = test::TestRequest::post().uri("/v1/variants").set_json(&body).to_request();
		let first: Vec<String> = test::call_and_read_body_json(&app, req).await;
		let req = test::TestRequest::post().uri("/v1/variants").set_json(&body).to_request();
		let second: Vec<String> = test::call_and_read_body_json(&app, req).await;

		assert_eq!(first.len(), 4);
		assert_eq!(first, second);
	}

	#[actix_web::test]
	async fn rejects_too_many_variants() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/v1/variants")
			.set_json(serde_json::json!({ "text": "Hello.", "count": 50 }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}
}
