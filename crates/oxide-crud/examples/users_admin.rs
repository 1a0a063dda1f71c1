//! Users Admin Example
//!
//! Serves a CRUD screen over an in-memory user store.
//! Run with: cargo run --example users_admin
//! Then visit: http://localhost:3000/crud

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use clap::Parser;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request as HyperRequest, Response as HyperResponse, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_crud::{BoxError, CallbackResult, Config, Crud, FieldType, FormField, Row};
use oxide_crud_router::{LoggingMiddleware, Method, MethodFilter, Request, Response, Router};

/// Standalone CRUD admin over an in-memory user list.
#[derive(Parser)]
#[command(name = "users-admin")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3000)]
    port: u16,

    /// Path the CRUD screens are served from.
    #[arg(short, long, default_value = "/crud")]
    endpoint: String,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Debug, Clone)]
struct User {
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    trashed: bool,
}

impl User {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: String::new(),
            role: "viewer".to_string(),
            trashed: false,
        }
    }
}

#[derive(Debug)]
struct UserStore {
    users: BTreeMap<String, User>,
    next_id: u32,
}

type SharedStore = Arc<Mutex<UserStore>>;

/// Largest request body accepted, inline image uploads included.
const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

fn init_sample_data() -> UserStore {
    let users = [
        ("ID1", User::new("Jon", "Doe")),
        ("ID2", User::new("Sarah", "Smith")),
        ("ID3", User::new("Tom", "Sawyer")),
    ]
    .into_iter()
    .map(|(id, user)| (id.to_string(), user))
    .collect();

    UserStore { users, next_id: 4 }
}

fn lock(store: &SharedStore) -> CallbackResult<MutexGuard<'_, UserStore>> {
    store
        .lock()
        .map_err(|_| BoxError::from("user store is unavailable"))
}

fn find<'a>(store: &'a UserStore, id: &str) -> CallbackResult<&'a User> {
    store
        .users
        .get(id)
        .filter(|user| !user.trashed)
        .ok_or_else(|| format!("user {id} not found").into())
}

fn value(values: &HashMap<String, String>, key: &str) -> String {
    values.get(key).cloned().unwrap_or_default()
}

// =============================================================================
// CRUD configuration
// =============================================================================

fn build_crud(endpoint: &str, store: &SharedStore) -> Result<Crud, oxide_crud::CrudError> {
    let rows_store = Arc::clone(store);
    let create_store = Arc::clone(store);
    let read_store = Arc::clone(store);
    let fetch_store = Arc::clone(store);
    let update_store = Arc::clone(store);
    let trash_store = Arc::clone(store);
    let extras_store = Arc::clone(store);

    let config = Config::new(endpoint)
        .home_url("/")
        .entity_names("User", "Users")
        .column_names(["First Name", "Last Name", "{!!<i class=\"bi bi-envelope\"></i> Email!!}"])
        .create_fields(vec![FormField::new("name", "Name")
            .required()
            .help("First and last name, separated by a space")])
        .update_fields(vec![
            FormField::new("first_name", "First Name").required(),
            FormField::new("last_name", "Last Name").required(),
            FormField::new("email", "Email").help("Used for sign-in notifications"),
            FormField::new("role", "Role")
                .field_type(FieldType::Select)
                .option("viewer", "Viewer")
                .option("editor", "Editor")
                .option("admin", "Administrator"),
        ])
        .rows(move || {
            let store = lock(&rows_store)?;
            Ok(store
                .users
                .iter()
                .filter(|(_, user)| !user.trashed)
                .map(|(id, user)| {
                    let email = if user.email.is_empty() {
                        "<span class=\"text-muted\">-</span>".to_string()
                    } else {
                        format!(
                            "<a href=\"mailto:{0}\">{0}</a>",
                            oxide_crud_forms::html_escape(&user.email)
                        )
                    };
                    Row::new(
                        id.as_str(),
                        [user.first_name.clone(), user.last_name.clone(), email],
                    )
                })
                .collect())
        })
        .create(move |values| {
            let name = value(values, "name");
            let (first, last) = name.trim().split_once(' ').unwrap_or((name.trim(), ""));
            let mut store = lock(&create_store)?;
            let id = format!("ID{}", store.next_id);
            store.next_id += 1;
            store
                .users
                .insert(id.clone(), User::new(first, last.trim()));
            info!(entity_id = %id, "user created");
            Ok(id)
        })
        .fetch_read_data(move |id| {
            let store = lock(&read_store)?;
            let user = find(&store, id)?;
            Ok(vec![
                ("ID".to_string(), id.to_string()),
                ("First Name".to_string(), user.first_name.clone()),
                ("Last Name".to_string(), user.last_name.clone()),
                ("Email".to_string(), user.email.clone()),
                ("Role".to_string(), user.role.clone()),
            ])
        })
        .fetch_update_data(move |id| {
            let store = lock(&fetch_store)?;
            let user = find(&store, id)?;
            Ok(HashMap::from([
                ("first_name".to_string(), user.first_name.clone()),
                ("last_name".to_string(), user.last_name.clone()),
                ("email".to_string(), user.email.clone()),
                ("role".to_string(), user.role.clone()),
            ]))
        })
        .update(move |id, values| {
            let mut store = lock(&update_store)?;
            let user = store
                .users
                .get_mut(id)
                .filter(|user| !user.trashed)
                .ok_or_else(|| BoxError::from(format!("user {id} not found")))?;
            user.first_name = value(values, "first_name");
            user.last_name = value(values, "last_name");
            user.email = value(values, "email");
            user.role = value(values, "role");
            Ok(())
        })
        .trash(move |id| {
            let mut store = lock(&trash_store)?;
            let user = store
                .users
                .get_mut(id)
                .filter(|user| !user.trashed)
                .ok_or_else(|| BoxError::from(format!("user {id} not found")))?;
            user.trashed = true;
            Ok(())
        })
        .read_extras(move |_id| {
            let trashed = lock(&extras_store)
                .map(|store| store.users.values().filter(|u| u.trashed).count())
                .unwrap_or_default();
            vec![format!(
                "<div class=\"alert alert-info mt-3\">Users in trash bin: {trashed}</div>"
            )]
        });

    Crud::new(config)
}

fn build_router(endpoint: &str, crud: Crud) -> Result<Router, oxide_crud_router::RouterError> {
    let home = format!(
        "<a href='{}'>Standalone CRUD</a>",
        oxide_crud_forms::html_escape(endpoint)
    );

    Ok(Router::new()
        .middleware(LoggingMiddleware)
        .middleware(MethodFilter::new(&[Method::Get, Method::Post]))
        .get("/", move |_| {
            let home = home.clone();
            async move { Response::html(home) }
        })?
        .get(endpoint, crud.clone().into_handler())?
        .post(endpoint, crud.into_handler())?)
}

// =============================================================================
// HTTP server
// =============================================================================

/// Collects a request body, refusing anything over [`MAX_BODY_BYTES`].
async fn read_body<B>(body: B) -> Result<Bytes, BoxError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    Ok(Limited::new(body, MAX_BODY_BYTES)
        .collect()
        .await?
        .to_bytes())
}

fn plain_response(status: StatusCode, text: &'static str) -> HyperResponse<Full<Bytes>> {
    let mut res = HyperResponse::new(Full::new(Bytes::from_static(text.as_bytes())));
    *res.status_mut() = status;
    res
}

async fn handle_request(
    req: HyperRequest<hyper::body::Incoming>,
    router: Arc<Router>,
) -> Result<HyperResponse<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let method = Method::parse(parts.method.as_str()).unwrap_or(Method::Get);
    let mut crud_req = Request::new(method, parts.uri.path());

    if let Some(query) = parts.uri.query() {
        crud_req.query = Request::parse_query_string(query);
    }

    for (key, value) in &parts.headers {
        if let Ok(v) = value.to_str() {
            crud_req.headers.insert(key.to_string(), v.to_string());
        }
    }

    crud_req.body = match read_body(body).await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) if err.is::<LengthLimitError>() => {
            tracing::warn!(limit = MAX_BODY_BYTES, "request body too large");
            return Ok(plain_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload Too Large",
            ));
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            return Ok(plain_response(StatusCode::BAD_REQUEST, "Bad Request"));
        }
    };

    let crud_res = router.handle(crud_req.with_parsed_form()).await;

    let mut builder = HyperResponse::builder().status(
        StatusCode::from_u16(crud_res.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    );
    for (key, value) in &crud_res.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    let response = builder
        .body(Full::new(Bytes::from(crud_res.body)))
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to build response");
            plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        });

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store: SharedStore = Arc::new(Mutex::new(init_sample_data()));
    let crud = build_crud(&args.endpoint, &store)?;
    let router = Arc::new(build_router(&args.endpoint, crud)?);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Users admin running at http://{addr}{}", args.endpoint);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let router = router.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| {
                let router = router.clone();
                handle_request(req, router)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(error = ?err, "error serving connection");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_body_within_limit() {
        let body = Full::new(Bytes::from_static(b"path=entity-create-ajax&name=Ada"));
        let bytes = read_body(body).await.unwrap();
        assert_eq!(&bytes[..], b"path=entity-create-ajax&name=Ada");
    }

    #[tokio::test]
    async fn test_read_body_over_limit() {
        let body = Full::new(Bytes::from(vec![b'a'; MAX_BODY_BYTES + 1]));
        let err = read_body(body).await.unwrap_err();
        assert!(err.is::<LengthLimitError>());
    }

    #[tokio::test]
    async fn test_demo_router_serves_manager() {
        let store: SharedStore = Arc::new(Mutex::new(init_sample_data()));
        let crud = build_crud("/crud", &store).unwrap();
        let router = build_router("/crud", crud).unwrap();

        let res = router.handle(Request::get("/crud")).await;
        assert_eq!(res.status, 200);
        assert!(res.body_string().unwrap().contains("User Manager"));
    }
}
