use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::{Deserialize, Serialize};

use bag_core::{is_valid_label, BagError, Classifier, Config, TrainingSet};

/// Serve a Naive-Bayes text classifier over HTTP
#[derive(Parser, Debug)]
#[command(name = "bag-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
	/// Address to bind
	#[arg(short, long, default_value = "127.0.0.1:5000")]
	bind: String,

	/// Training set (JSON) to train on before serving
	#[arg(short, long)]
	training: Option<PathBuf>,

	/// N-gram size (overrides the training set's)
	#[arg(long)]
	ngram_size: Option<i64>,

	/// Smoothing parameter (overrides the training set's)
	#[arg(long)]
	smoothing: Option<f64>,
}

/// Query parameters of `PUT /v1/train`
#[derive(Deserialize)]
struct TrainParams {
	label: Option<String>,
	text: Option<String>,
}

/// Query parameters of `GET /v1/classify`
#[derive(Deserialize)]
struct ClassifyParams {
	text: Option<String>,
}

#[derive(Serialize)]
struct ClassifyResponse {
	best: Option<String>,
	scores: BTreeMap<String, f64>,
}

/// The model is read by `classify` and written by `train`; both hold the
/// lock for the whole call so counts are always seen as a consistent group.
struct SharedData {
	model: Classifier,
}

/// HTTP PUT endpoint `/v1/train`
///
/// Trains one document. The text may be empty, the label may not be blank.
#[put("/v1/train")]
async fn put_train(data: web::Data<RwLock<SharedData>>, query: web::Query<TrainParams>) -> impl Responder {
	let label = match &query.label {
		Some(s) if is_valid_label(s) => s.as_str(),
		_ => return HttpResponse::BadRequest().body(BagError::invalid_label("missing or blank label").to_string()),
	};
	let text = query.text.as_deref().unwrap_or_default();

	let mut shared_data = match data.write() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model.train(text, label);
	log::debug!("trained one document for {label:?}");

	HttpResponse::Ok().body(format!("Trained {} documents", shared_data.model.total_documents()))
}

/// HTTP GET endpoint `/v1/classify`
///
/// Returns the best label and the score of every label as JSON.
#[get("/v1/classify")]
async fn get_classify(data: web::Data<RwLock<SharedData>>, query: web::Query<ClassifyParams>) -> impl Responder {
	let text = query.text.as_deref().unwrap_or_default();

	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match shared_data.model.score(text) {
		Ok(results) => HttpResponse::Ok().json(ClassifyResponse {
			best: results.highest().map(|(label, _)| label.to_owned()),
			scores: results.into_inner().into_iter().collect(),
		}),
		Err(e @ BagError::InsufficientTrainingData(_)) => HttpResponse::Conflict().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/labels`
///
/// Returns every trained label with its document count.
#[get("/v1/labels")]
async fn get_labels(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	let shared_data = match data.read() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let labels: BTreeMap<&str, usize> = shared_data
		.model
		.labels()
		.into_iter()
		.map(|label| (label, shared_data.model.document_count(label)))
		.collect();
	HttpResponse::Ok().json(labels)
}

/// Builds the initial model, trained on `--training` when given.
fn initial_model(args: &Args) -> bag_core::Result<Classifier> {
	let overrides = Config { ngram_size: args.ngram_size, smoothing_parameter: args.smoothing };
	let training_set = match &args.training {
		Some(path) => TrainingSet::from_file(path)?,
		None => TrainingSet::default(),
	};
	Classifier::from_training_set_with(&training_set, &overrides)
}

/// Main entry point for the server.
///
/// Trains the initial model, wraps it in a `RwLock` and starts an
/// Actix-web HTTP server.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let model = initial_model(&args)?;
	log::info!("serving a model trained on {} documents on {}", model.total_documents(), args.bind);

	let shared_model = web::Data::new(RwLock::new(SharedData { model }));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(put_train)
			.service(get_classify)
			.service(get_labels)
	})
		.bind(args.bind.as_str())?
		.run()
		.await?;

	Ok(())
}
