use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;

use tiny_http::{Header, Method, Request, Response, Server};

use facemask_core::pipeline::function_io::{FunctionRequest, FunctionResponse};
use facemask_core::pipeline::mask_faces_use_case::MaskFacesUseCase;

/// Queued requests per worker before the accept loop blocks.
const QUEUE_DEPTH_PER_WORKER: usize = 4;

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Accepts HTTP requests and fans them out to `workers` pipeline threads.
///
/// Layout: `accept → bounded queue → worker × N`. Each worker runs one
/// invocation at a time to completion; the use case is shared read-only.
pub fn serve(
    listen: &str,
    use_case: Arc<MaskFacesUseCase>,
    workers: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let server = Server::http(listen).map_err(|e| format!("cannot listen on {listen}: {e}"))?;
    log::info!("Listening on {listen} with {workers} worker(s)");

    let (job_tx, job_rx) = crossbeam_channel::bounded::<Request>(workers * QUEUE_DEPTH_PER_WORKER);
    let handles: Vec<JoinHandle<()>> = (0..workers)
        .map(|_| spawn_worker(job_rx.clone(), Arc::clone(&use_case)))
        .collect();
    drop(job_rx);

    for request in server.incoming_requests() {
        if job_tx.send(request).is_err() {
            log::error!("All workers exited; stopping accept loop");
            break;
        }
    }

    drop(job_tx);
    for handle in handles {
        let _ = handle.join();
    }
    Ok(())
}

fn spawn_worker(
    job_rx: crossbeam_channel::Receiver<Request>,
    use_case: Arc<MaskFacesUseCase>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for request in job_rx.iter() {
            handle_request(&use_case, request);
        }
    })
}

fn handle_request(use_case: &MaskFacesUseCase, mut request: Request) {
    let response = match read_request(&mut request, MAX_BODY_BYTES) {
        Ok(function_request) => invoke(use_case, &function_request),
        Err(rejection) => rejection,
    };

    if let Err(e) = request.respond(to_http_response(response)) {
        log::warn!("Failed to send response: {e}");
    }
}

/// Reads a POST request into a [`FunctionRequest`], or the error response to send instead.
fn read_request(request: &mut Request, limit: usize) -> Result<FunctionRequest, FunctionResponse> {
    if *request.method() != Method::Post {
        return Err(FunctionResponse::error(405, "method not allowed: use POST"));
    }
    if request.body_length().is_some_and(|len| len > limit) {
        return Err(too_large(limit));
    }
    let content_type = find_content_type(request.headers()).map(str::to_string);
    let body = read_body(request.as_reader(), limit)
        .map_err(|e| FunctionResponse::error(400, format!("cannot read request body: {e}")))?
        .ok_or_else(|| too_large(limit))?;
    Ok(FunctionRequest { content_type, body })
}

/// Reads at most `limit` bytes; `None` when the body is longer.
fn read_body(reader: impl Read, limit: usize) -> std::io::Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    reader.take(limit as u64 + 1).read_to_end(&mut body)?;
    Ok((body.len() <= limit).then_some(body))
}

fn too_large(limit: usize) -> FunctionResponse {
    log::warn!("Rejecting request body over {limit} bytes");
    FunctionResponse::error(413, format!("request body exceeds {limit} bytes"))
}

/// Runs one invocation; a panic fails this request only.
fn invoke(use_case: &MaskFacesUseCase, request: &FunctionRequest) -> FunctionResponse {
    panic::catch_unwind(AssertUnwindSafe(|| use_case.handle(request))).unwrap_or_else(|_| {
        log::error!("Invocation panicked");
        FunctionResponse::error(500, "internal error while processing image")
    })
}

fn find_content_type(headers: &[Header]) -> Option<&str> {
    headers
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str())
}

fn to_http_response(response: FunctionResponse) -> Response<Cursor<Vec<u8>>> {
    let mut http = Response::from_data(response.body).with_status_code(response.status);
    match Header::from_bytes(&b"Content-Type"[..], response.content_type.as_bytes()) {
        Ok(header) => http = http.with_header(header),
        Err(()) => log::warn!("Invalid content type {:?}", response.content_type),
    }
    http
}
