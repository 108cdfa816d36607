pub mod engine;
mod errors;
pub mod use_cases;


pub use engine::AuthEngine;
pub use use_cases::{IsAdminUseCase, LoginUseCase, RegisterUseCase};
