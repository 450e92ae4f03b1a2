// HTTP handler bindings for the solver endpoints
//
// Thin wrapper functions that bind Rocket routes to the Solver's core
// logic. Handlers deserialize the incoming snapshot, extract the Solver
// from Rocket's managed state and delegate; the move response is the bare
// token string the game protocol expects.

use rocket::serde::json::Json;
use serde_json::Value;

use crate::grid::GridModel;
use crate::solver::Solver;

/// GET / endpoint
/// Returns solver metadata
#[get("/")]
pub fn index(solver: &rocket::State<Solver>) -> Json<Value> {
    Json(solver.info())
}

/// POST /move endpoint
/// Called each tick to compute and return the next move token
#[post("/move", format = "json", data = "<tick>")]
pub async fn get_move(solver: &rocket::State<Solver>, tick: Json<GridModel>) -> String {
    solver.decide(&tick)
}
