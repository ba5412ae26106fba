use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{NextTicketQuery, NextTicketResponse, PetEntry, RegisterBatchRequest, RegisterBatchResponse, Tutor};
use crate::routes::error_response;
use crate::services::{AllocationError, RegistrationService, RegistrationStore};

/// Configure ticket routes for the given store
pub fn configure<S: RegistrationStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/tickets/next", web::get().to(next_ticket::<S>))
        .route("/registrations", web::post().to(register_batch::<S>));
}

/// Preview the next ticket of a category
///
/// GET /api/v1/tickets/next?category=group-event
async fn next_ticket<S: RegistrationStore + 'static>(
    service: web::Data<RegistrationService<S>>,
    query: web::Query<NextTicketQuery>,
) -> impl Responder {
    let category = query.category;

    match service.preview_next(category).await {
        Ok(ticket) => HttpResponse::Ok().json(NextTicketResponse { category, ticket }),
        Err(e) => allocation_error_response(e),
    }
}

/// Sign up one tutor's animals
///
/// POST /api/v1/registrations
///
/// Request body:
/// ```json
/// {
///   "category": "group-event",
///   "tutorName": "string",
///   "tutorPhone": "string",
///   "pets": [{ "name": "string", "species": "gato" }]
/// }
/// ```
async fn register_batch<S: RegistrationStore + 'static>(
    service: web::Data<RegistrationService<S>>,
    req: web::Json<RegisterBatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for registration request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let req = req.into_inner();
    let tutor = Tutor {
        name: req.tutor_name,
        phone: req.tutor_phone,
    };
    let pets: Vec<PetEntry> = req
        .pets
        .into_iter()
        .map(|pet| PetEntry {
            name: pet.name,
            species: pet.species,
        })
        .collect();

    match service.register_batch(req.category, &tutor, &pets).await {
        Ok(registrations) => HttpResponse::Created().json(RegisterBatchResponse {
            category: req.category,
            tickets: registrations.into_iter().map(|r| r.ticket).collect(),
        }),
        Err(e) => allocation_error_response(e),
    }
}

fn allocation_error_response(err: AllocationError) -> HttpResponse {
    match &err {
        AllocationError::Ticket(_) => {
            tracing::error!("Ticket allocation failed: {}", err);
            error_response(StatusCode::CONFLICT, "Ticket sequence exhausted", err)
        }
        AllocationError::Contended { .. } => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, "Ticket allocation contended", err)
        }
        AllocationError::Store(_) => {
            tracing::error!("Ticket store failed: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to allocate ticket", err)
        }
    }
}
