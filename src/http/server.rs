use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Multipart, Query},
    response::{Html, IntoResponse},
    routing::{get, post},
    serve, Form, Router,
};
use log::{debug, info};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::{
    page::chat_page_view::render_chat_page,
    session::InputMode,
    speech::{audio::AudioClip, recognizer::SpeechRecognizer},
};

use super::{response_result::ResponseResult, server_environment::ServerEnvironment};

const AUDIO_FIELD_NAME: &str = "audio";

/// Runs the chatbot as an http server using the specified `ServerEnvironment`.
pub async fn run_http_server<Recognizer: SpeechRecognizer + Send + Sync + 'static>(
    environment: Arc<ServerEnvironment<Recognizer>>,
) -> Result<()> {
    let server = chatbot_server(environment.clone());
    let listener = TcpListener::bind(environment.address()).await?;
    info!("Chatbot listening on {}.", environment.address());
    Ok(serve(listener, server).await?)
}

fn chatbot_server<Recognizer: SpeechRecognizer + Send + Sync + 'static>(
    environment: Arc<ServerEnvironment<Recognizer>>,
) -> Router<()> {
    let page_environment = environment.clone();
    let ask_environment = environment.clone();
    Router::new()
        .route(
            "/",
            get(move |query| get_chat_page(query, page_environment)),
        )
        .route("/ask", post(move |form| post_ask(form, ask_environment)))
        .route(
            "/listen",
            post(move |multipart| post_listen(multipart, environment)),
        )
}

#[derive(Debug, Deserialize)]
struct PageQueryParameters {
    mode: Option<InputMode>,
}

async fn get_chat_page(
    Query(query): Query<PageQueryParameters>,
    environment: Arc<ServerEnvironment<impl SpeechRecognizer>>,
) -> impl IntoResponse {
    let mut session = environment.session().lock().await;
    if let Some(mode) = query.mode.filter(|mode| *mode != session.mode()) {
        debug!("Switching to {:?} input.", mode);
        *session = session.clone().with_mode(mode);
    }
    Html(render_chat_page(&session))
}

#[derive(Debug, Deserialize)]
struct AskForm {
    #[serde(default)]
    query: String,
}

async fn post_ask(
    Form(form): Form<AskForm>,
    environment: Arc<ServerEnvironment<impl SpeechRecognizer>>,
) -> impl IntoResponse {
    let mut session = environment.session().lock().await;
    *session = session.clone().ask(&form.query, environment.normalizer());
    Html(render_chat_page(&session))
}

async fn post_listen(
    multipart: Multipart,
    environment: Arc<ServerEnvironment<impl SpeechRecognizer>>,
) -> impl IntoResponse {
    ResponseResult::new(listen(multipart, environment.as_ref()).await)
}

async fn listen(
    mut multipart: Multipart,
    environment: &ServerEnvironment<impl SpeechRecognizer>,
) -> Result<Html<String>> {
    let clip = read_audio_clip(&mut multipart)
        .await?
        .unwrap_or_else(|| AudioClip::new(vec![], None));
    let mut session = environment.session().lock().await;
    *session = session
        .clone()
        .listen(clip, environment.recognizer(), environment.normalizer())
        .await;
    Ok(Html(render_chat_page(&session)))
}

/// Reads the first `audio` field of a multipart upload.
async fn read_audio_clip(multipart: &mut Multipart) -> Result<Option<AudioClip>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD_NAME) {
            continue;
        }
        let content_type = field.content_type().map(|content_type| content_type.to_string());
        let bytes = field.bytes().await?;
        debug!("Received {} bytes of audio ({:?}).", bytes.len(), content_type);
        return Ok(Some(AudioClip::new(bytes.to_vec(), content_type)));
    }
    Ok(None)
}
