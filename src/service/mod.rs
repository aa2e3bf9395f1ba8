//! GameService: one SQL statement per CRUD operation.

mod games;
pub use games::GameService;
