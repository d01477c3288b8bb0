//! Full CRUD lifecycle test against the live todo server.
//!
//! # Design
//! Starts the server on a random port, then exercises every client
//! operation over real HTTP using ureq, feeding the parsed results into a
//! `TodoListView` the way a UI would.

use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoListView,
    ViewStatus,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let client = TodoClient::new(&format!("http://{}", start_server()));
    let mut view = TodoListView::new();

    // Step 1: initial load, empty.
    let req = client.build_list_todos();
    view.apply_list(client.parse_list_todos(execute(req)));
    assert_eq!(view.status(), ViewStatus::Loaded);
    assert!(view.is_empty(), "expected empty list");

    // Step 2: blank titles are rejected by the server.
    let blank = CreateTodo {
        title: "   ".to_string(),
        description: None,
    };
    let req = client.build_create_todo(&blank).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Validation(ref msg) if msg == "Title is required"));

    // Step 3: create.
    let input = view.create_request("Buy milk", "").unwrap();
    let req = client.build_create_todo(&input).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
    assert_eq!(created.created_at, created.updated_at);
    view.apply_created(Ok(created.clone()));
    let id = created.id.clone();

    // Step 4: the server list holds exactly that record.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos, vec![created.clone()]);

    // Step 5: toggle completed.
    let update = view.toggle_request(&id).unwrap();
    let req = client.build_update_todo(&update).unwrap();
    view.apply_updated(client.parse_update_todo(execute(req)));
    let toggled = view.get(&id).unwrap().clone();
    assert!(toggled.completed);
    assert_eq!(toggled.title, "Buy milk");
    assert!(toggled.updated_at >= toggled.created_at);

    // Step 6: edit title and description.
    assert!(view.begin_edit(&id));
    view.edit_title(&id, " Buy oat milk ");
    view.edit_description(&id, " two cartons ");
    let update = view.save_request(&id).unwrap();
    let req = client.build_update_todo(&update).unwrap();
    view.apply_updated(client.parse_update_todo(execute(req)));
    assert!(!view.is_editing(&id));
    let edited = view.get(&id).unwrap();
    assert_eq!(edited.title, "Buy oat milk");
    assert_eq!(edited.description.as_deref(), Some("two cartons"));
    assert!(edited.completed);

    // Step 7: the server agrees with the local view.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos.as_slice(), view.todos());

    // Step 8: delete returns the removed record.
    let req = client.build_delete_todo(&id).unwrap();
    let removed = client.parse_delete_todo(execute(req)).unwrap();
    assert_eq!(removed.id, id);
    view.apply_deleted(&id, Ok(removed));
    assert!(view.is_empty());

    // Step 9: delete again, NotFound; the view is unchanged.
    let req = client.build_delete_todo(&id).unwrap();
    let result = client.parse_delete_todo(execute(req));
    assert!(matches!(result, Err(ApiError::NotFound)));
    view.apply_deleted(&id, result);
    assert!(view.is_empty());

    // Step 10: list, empty again.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}

#[test]
fn update_unknown_id_is_not_found() {
    let client = TodoClient::new(&format!("http://{}", start_server()));
    let update = todo_core::UpdateTodo::new("todo-404").completed(true);
    let req = client.build_update_todo(&update).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
