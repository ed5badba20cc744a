pub mod person;
pub mod plan;
pub mod auth;

pub use person::{Address, AddressPatch, Person, ProfilePatch, UserRole};
pub use plan::{ActivityLevel, Goal, NewPlan, Plan, PlanPatch};
pub use auth::{LoginRequest, SignUpRequest};
