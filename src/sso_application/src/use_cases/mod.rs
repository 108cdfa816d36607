pub mod is_admin;
pub mod login;
pub mod register;

pub use is_admin::IsAdminUseCase;
pub use login::LoginUseCase;
pub use register::RegisterUseCase;
