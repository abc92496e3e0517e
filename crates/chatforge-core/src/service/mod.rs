//! Service layer: validation, ownership scoping, and orchestration over
//! the repository ports.

pub mod bot;
pub mod capture;
pub mod context;
